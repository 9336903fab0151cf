//! Scene graph for the treemap: one cell per leaf with its fill, clip
//! region, label lines and tooltip.

use super::color::OrdinalScale;
use super::format::format_grouped;
use super::hierarchy::{Hierarchy, NodeId};
use super::layout::LayoutRect;
use crate::{RenderConfig, TreeNode};

/// One line of a leaf label (one word of the name).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    /// Horizontal offset inside the cell
    pub x: f64,
    /// Vertical offset inside the cell, in em
    pub y_em: f64,
    /// `None` renders at full opacity
    pub opacity: Option<f64>,
}

/// A drawn leaf rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafCell {
    /// Position among the leaves; also keys the clip path id
    pub index: usize,
    pub node: NodeId,
    pub name: String,
    pub value: f64,
    pub rect: LayoutRect,
    pub fill: &'static str,
    pub fill_opacity: f64,
    pub clip_id: String,
    pub label: Vec<LabelLine>,
    pub tooltip: String,
}

impl LeafCell {
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub font: String,
    pub cells: Vec<LeafCell>,
}

impl Scene {
    pub fn cell(&self, name: &str) -> Option<&LeafCell> {
        self.cells.iter().find(|c| c.name == name)
    }
}

/// Split a name into label lines, one per whitespace-separated word.
pub fn label_lines(name: &str, config: &RenderConfig) -> Vec<LabelLine> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| LabelLine {
            text: (*word).to_string(),
            x: config.label_inset,
            y_em: config.first_line_em + i as f64 * config.line_height_em,
            opacity: (i == last).then_some(config.last_line_opacity),
        })
        .collect()
}

/// Root-to-leaf breadcrumb, a newline, then the formatted value and unit.
pub fn tooltip_text(hierarchy: &Hierarchy, leaf: NodeId, config: &RenderConfig) -> String {
    let path: Vec<&str> = hierarchy
        .ancestors(leaf)
        .iter()
        .rev()
        .filter(|&&n| config.breadcrumb_root || n != hierarchy.root() || n == leaf)
        .map(|&n| hierarchy.node(n).name.as_str())
        .collect();
    format!(
        "{}\n{}{}",
        path.join(config.breadcrumb_separator.as_str()),
        format_grouped(hierarchy.node(leaf).value, 2),
        config.unit_suffix
    )
}

/// Build the leaf cells from a computed layout.
///
/// Colors are keyed by the names of the root's children in data order, so
/// the palette assignment does not depend on sales ranking.
pub fn paint(
    tree: &TreeNode,
    hierarchy: &Hierarchy,
    rects: &[LayoutRect],
    config: &RenderConfig,
) -> Scene {
    let scale = OrdinalScale::tableau10(tree.children().iter().map(|c| c.name.clone()));

    let cells = hierarchy
        .leaves()
        .into_iter()
        .enumerate()
        .map(|(index, leaf)| {
            let node = hierarchy.node(leaf);
            let group = hierarchy.top_level_ancestor(leaf);
            LeafCell {
                index,
                node: leaf,
                name: node.name.clone(),
                value: node.value,
                rect: rects[leaf],
                fill: scale.color(&hierarchy.node(group).name),
                fill_opacity: config.fill_opacity,
                clip_id: format!("clip-{}", index),
                label: label_lines(&node.name, config),
                tooltip: tooltip_text(hierarchy, leaf, config),
            }
        })
        .collect();

    Scene {
        width: config.canvas.width,
        height: config.canvas.height,
        font: config.font.clone(),
        cells,
    }
}
