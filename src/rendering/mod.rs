//! Treemap rendering: hierarchy → layout → paint → SVG.

pub mod color;
pub mod format;
pub mod hierarchy;
pub mod layout;
pub mod paint;
pub mod svg;

pub use hierarchy::{Hierarchy, NodeId};
pub use layout::{treemap, LayoutOptions, LayoutRect};
pub use paint::{LabelLine, LeafCell, Scene};

use crate::{RenderConfig, TreeNode};
use log::debug;

/// Render `tree` onto a fresh scene.
///
/// Every call rebuilds the hierarchy and layout from scratch; the input tree
/// is only read.
pub fn render(tree: &TreeNode, config: &RenderConfig) -> Scene {
    let hierarchy = Hierarchy::from_tree(tree);
    let rects = treemap(&hierarchy, &LayoutOptions::from(config));
    let scene = paint::paint(tree, &hierarchy, &rects, config);
    debug!(
        "rendered {} cells from {} nodes on {}x{}",
        scene.cells.len(),
        hierarchy.len(),
        scene.width,
        scene.height
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_does_not_touch_input() {
        let tree = TreeNode::group(
            "root",
            vec![TreeNode::leaf("b", 1.0), TreeNode::leaf("a", 3.0)],
        );
        let before = tree.clone();
        let scene = render(&tree, &RenderConfig::default());
        assert_eq!(tree, before);
        assert_eq!(scene.cells.len(), 2);
        assert_eq!(scene.cells[0].name, "a");
    }
}
