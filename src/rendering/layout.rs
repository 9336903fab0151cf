//! Squarified treemap layout.
//!
//! Rows are grown greedily while the worst aspect ratio in the row keeps
//! improving against a golden-ratio target. Each row is laid out as a strip
//! along the shorter side of the remaining space; nodes recurse into their
//! padded rectangle.

use super::hierarchy::{Hierarchy, NodeId};
use crate::RenderConfig;

/// Target aspect ratio of squarified rows.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub depth: usize,
    pub parent: Option<NodeId>,
}

impl LayoutRect {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the interiors of both rectangles intersect.
    pub fn overlaps(&self, other: &LayoutRect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub width: f64,
    pub height: f64,
    /// Gap between adjacent siblings
    pub padding_inner: f64,
    /// Gap between a parent's edge and its children
    pub padding_outer: f64,
    pub round: bool,
    pub ratio: f64,
}

impl LayoutOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_inner: 0.0,
            padding_outer: 0.0,
            round: false,
            ratio: GOLDEN_RATIO,
        }
    }

    /// Uniform padding, inner and outer.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self.padding_outer = padding;
        self
    }

    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }
}

impl From<&RenderConfig> for LayoutOptions {
    fn from(config: &RenderConfig) -> Self {
        LayoutOptions::new(config.canvas.width as f64, config.canvas.height as f64)
            .padding(config.padding)
            .round(config.round)
    }
}

/// Compute a rectangle for every node of `hierarchy`, indexed by `NodeId`.
pub fn treemap(hierarchy: &Hierarchy, opts: &LayoutOptions) -> Vec<LayoutRect> {
    let mut rects: Vec<LayoutRect> = (0..hierarchy.len())
        .map(|id| {
            let node = hierarchy.node(id);
            LayoutRect {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
                depth: node.depth,
                parent: node.parent,
            }
        })
        .collect();
    if hierarchy.is_empty() {
        return rects;
    }

    let root = hierarchy.root();
    rects[root].x1 = opts.width;
    rects[root].y1 = opts.height;

    // Parents are positioned (and tile their children) before the children
    // themselves are visited.
    let half_inner = opts.padding_inner / 2.0;
    for id in hierarchy.pre_order() {
        let node = hierarchy.node(id);
        let inset = if node.depth == 0 { 0.0 } else { half_inner };

        let r = rects[id];
        let (x0, x1) = shrink(r.x0 + inset, r.x1 - inset);
        let (y0, y1) = shrink(r.y0 + inset, r.y1 - inset);
        rects[id] = LayoutRect { x0, y0, x1, y1, ..r };

        if !node.is_leaf() {
            let edge = opts.padding_outer - half_inner;
            let (cx0, cx1) = shrink(x0 + edge, x1 - edge);
            let (cy0, cy1) = shrink(y0 + edge, y1 - edge);
            squarify(hierarchy, &mut rects, id, opts.ratio, cx0, cy0, cx1, cy1);
        }
    }

    if opts.round {
        for r in rects.iter_mut() {
            r.x0 = round_half_up(r.x0);
            r.y0 = round_half_up(r.y0);
            r.x1 = round_half_up(r.x1);
            r.y1 = round_half_up(r.y1);
        }
    }
    rects
}

/// Collapse an inverted interval to its midpoint.
fn shrink(lo: f64, hi: f64) -> (f64, f64) {
    if hi < lo {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Max that propagates NaN instead of discarding it.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn fraction(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole
    } else {
        0.0
    }
}

#[allow(clippy::too_many_arguments)]
fn squarify(
    hierarchy: &Hierarchy,
    rects: &mut [LayoutRect],
    parent: NodeId,
    ratio: f64,
    mut x0: f64,
    mut y0: f64,
    x1: f64,
    y1: f64,
) {
    let nodes = &hierarchy.node(parent).children;
    let weight = |i: usize| hierarchy.node(nodes[i]).value;
    let n = nodes.len();
    let mut remaining = hierarchy.node(parent).value;
    let (mut i0, mut i1) = (0usize, 0usize);

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Start the row at the next non-empty node.
        let mut sum = weight(i1);
        i1 += 1;
        while sum == 0.0 && i1 < n {
            sum = weight(i1);
            i1 += 1;
        }
        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = nan_max(dy / dx, dx / dy) / (remaining * ratio);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = nan_max(max_value / beta, beta / min_value);

        // Keep adding nodes while the worst aspect ratio holds or improves.
        while i1 < n {
            let value = weight(i1);
            sum += value;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            beta = sum * sum * alpha;
            let new_ratio = nan_max(max_value / beta, beta / min_value);
            if new_ratio > min_ratio {
                sum -= value;
                break;
            }
            min_ratio = new_ratio;
            i1 += 1;
        }

        let row = &nodes[i0..i1];
        if dx < dy {
            let row_y1 = if dy != 0.0 { y0 + dy * fraction(sum, remaining) } else { y1 };
            dice(hierarchy, rects, row, sum, x0, y0, x1, row_y1);
            if dy != 0.0 {
                y0 = row_y1;
            }
        } else {
            let row_x1 = if dx != 0.0 { x0 + dx * fraction(sum, remaining) } else { x1 };
            slice(hierarchy, rects, row, sum, x0, y0, row_x1, y1);
            if dx != 0.0 {
                x0 = row_x1;
            }
        }
        remaining -= sum;
        i0 = i1;
    }
}

/// Lay `row` out left to right across `[x0, x1]`.
#[allow(clippy::too_many_arguments)]
fn dice(
    hierarchy: &Hierarchy,
    rects: &mut [LayoutRect],
    row: &[NodeId],
    total: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) {
    let k = fraction(x1 - x0, total);
    let mut x = x0;
    for &id in row {
        let r = &mut rects[id];
        r.y0 = y0;
        r.y1 = y1;
        r.x0 = x;
        x += hierarchy.node(id).value * k;
        r.x1 = x;
    }
}

/// Lay `row` out top to bottom across `[y0, y1]`.
#[allow(clippy::too_many_arguments)]
fn slice(
    hierarchy: &Hierarchy,
    rects: &mut [LayoutRect],
    row: &[NodeId],
    total: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) {
    let k = fraction(y1 - y0, total);
    let mut y = y0;
    for &id in row {
        let r = &mut rects[id];
        r.x0 = x0;
        r.x1 = x1;
        r.y0 = y;
        y += hierarchy.node(id).value * k;
        r.y1 = y;
    }
}
