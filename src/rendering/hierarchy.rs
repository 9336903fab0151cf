//! Arena-backed hierarchy derived from the input tree.
//!
//! Nodes live in a `Vec` in pre-order of the input; relationships are stored
//! as indices (a parent index per node, an ordered child list per parent), so
//! upward walks never need back-pointers.

use crate::TreeNode;
use log::warn;

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub name: String,
    /// Aggregate weight: the leaf's own value, or the sum over descendants.
    pub value: f64,
    pub depth: usize,
    pub parent: Option<NodeId>,
    /// Children sorted by descending value (stable).
    pub children: Vec<NodeId>,
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Build the hierarchy, summing leaf values upward and sorting siblings.
    ///
    /// Missing, non-finite and negative leaf values weigh zero.
    pub fn from_tree(root: &TreeNode) -> Self {
        let mut hierarchy = Self {
            nodes: Vec::with_capacity(root.leaf_count() * 2),
        };
        let mut degenerate = 0usize;
        hierarchy.push(root, None, 0, &mut degenerate);
        if degenerate > 0 {
            warn!("{} leaves have no usable value and were weighted as zero", degenerate);
        }
        hierarchy
    }

    fn push(
        &mut self,
        node: &TreeNode,
        parent: Option<NodeId>,
        depth: usize,
        degenerate: &mut usize,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(HierarchyNode {
            name: node.name.clone(),
            value: 0.0,
            depth,
            parent,
            children: Vec::new(),
        });

        if node.is_leaf() {
            self.nodes[id].value = match node.value {
                Some(v) if v.is_finite() && v >= 0.0 => v,
                _ => {
                    *degenerate += 1;
                    0.0
                }
            };
            return id;
        }

        let mut children: Vec<NodeId> = node
            .children()
            .iter()
            .map(|child| self.push(child, Some(id), depth + 1, &mut *degenerate))
            .collect();
        // sort_by is stable: equal weights keep data order
        children.sort_by(|&a, &b| {
            self.nodes[b]
                .value
                .partial_cmp(&self.nodes[a].value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total: f64 = children.iter().map(|&c| self.nodes[c].value).sum();
        let node_ref = &mut self.nodes[id];
        node_ref.value = total;
        node_ref.children = children;
        id
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node, parents before children, siblings in sorted order.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id].children.iter().rev());
        }
        order
    }

    /// Leaves in pre-order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.pre_order()
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .collect()
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(Some(id), |&n| self.nodes[n].parent).collect()
    }

    /// The depth-1 ancestor of `id` (the node itself at depth 1, the root for
    /// the root).
    pub fn top_level_ancestor(&self, id: NodeId) -> NodeId {
        std::iter::successors(Some(id), |&n| self.nodes[n].parent)
            .find(|&n| self.nodes[n].depth <= 1)
            .unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::group(
            "root",
            vec![
                TreeNode::group(
                    "Wii",
                    vec![TreeNode::leaf("Wii Sports", 82.53), TreeNode::leaf("Wii Fit", 22.0)],
                ),
                TreeNode::group(
                    "PS2",
                    vec![
                        TreeNode::leaf("Grand Theft Auto V", 20.32),
                        TreeNode::leaf("Gran Turismo 4", 11.66),
                        TreeNode::leaf("Grand Theft Auto: San Andreas", 20.81),
                    ],
                ),
                TreeNode::group("Empty", vec![TreeNode::leaf("Nothing", 0.0)]),
            ],
        )
    }

    #[test]
    fn sums_and_sorts_descending() {
        let h = Hierarchy::from_tree(&sample());
        let root = h.node(h.root());
        assert!((root.value - 157.32).abs() < 1e-9);

        let names: Vec<&str> = root.children.iter().map(|&c| h.node(c).name.as_str()).collect();
        assert_eq!(names, vec!["Wii", "PS2", "Empty"]);

        let ps2 = h.node(root.children[1]);
        let games: Vec<&str> = ps2.children.iter().map(|&c| h.node(c).name.as_str()).collect();
        assert_eq!(
            games,
            vec!["Grand Theft Auto: San Andreas", "Grand Theft Auto V", "Gran Turismo 4"]
        );
    }

    #[test]
    fn ties_keep_data_order() {
        let tree = TreeNode::group(
            "root",
            vec![
                TreeNode::leaf("first", 5.0),
                TreeNode::leaf("second", 5.0),
                TreeNode::leaf("third", 5.0),
            ],
        );
        let h = Hierarchy::from_tree(&tree);
        let names: Vec<&str> = h
            .node(h.root())
            .children
            .iter()
            .map(|&c| h.node(c).name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn internal_values_are_ignored() {
        let mut group = TreeNode::group("g", vec![TreeNode::leaf("a", 2.0)]);
        group.value = Some(100.0);
        let h = Hierarchy::from_tree(&TreeNode::group("root", vec![group]));
        assert_eq!(h.node(h.root()).value, 2.0);
    }

    #[test]
    fn degenerate_values_weigh_zero() {
        let mut missing = TreeNode::leaf("missing", 0.0);
        missing.value = None;
        let tree = TreeNode::group(
            "root",
            vec![
                missing,
                TreeNode::leaf("negative", -3.0),
                TreeNode::leaf("nan", f64::NAN),
                TreeNode::leaf("ok", 4.0),
            ],
        );
        let h = Hierarchy::from_tree(&tree);
        assert_eq!(h.node(h.root()).value, 4.0);
        assert_eq!(h.leaves().len(), 4);
    }

    #[test]
    fn leaves_follow_sorted_pre_order() {
        let h = Hierarchy::from_tree(&sample());
        let names: Vec<&str> = h.leaves().iter().map(|&c| h.node(c).name.as_str()).collect();
        assert_eq!(names[0], "Wii Sports");
        assert_eq!(names[2], "Grand Theft Auto: San Andreas");
        assert_eq!(names.last(), Some(&"Nothing"));
    }

    #[test]
    fn top_level_ancestor_walks_parent_indices() {
        let h = Hierarchy::from_tree(&sample());
        for leaf in h.leaves() {
            let top = h.top_level_ancestor(leaf);
            assert_eq!(h.node(top).depth, 1);
            assert_eq!(Some(top), h.node(leaf).parent);
        }
        assert_eq!(h.top_level_ancestor(h.root()), h.root());

        let leaf = h.leaves()[0];
        let path: Vec<&str> = h
            .ancestors(leaf)
            .iter()
            .rev()
            .map(|&n| h.node(n).name.as_str())
            .collect();
        assert_eq!(path, vec!["root", "Wii", "Wii Sports"]);
    }
}
