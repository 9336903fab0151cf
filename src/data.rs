//! Input data model: the rooted tree published as JSON.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Default location of the video game sales dataset.
pub const DATASET_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// A node of the input tree.
///
/// Leaves carry a `value`; internal nodes carry `children`. The published
/// dataset encodes values as strings (`"82.53"`), so numeric strings are
/// accepted. Anything else that is not a number deserializes as `None` and is
/// weighted as zero by the layout.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TreeNode {
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_weight",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<f64>,
    /// Platform label carried by leaves of the published dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Child nodes in data order (empty for leaves).
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// A node without children (or with an empty `children` array) is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children().iter().map(TreeNode::leaf_count).sum()
        }
    }
}

fn deserialize_weight<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_weight(&raw))
}

/// Number-like coercion: numbers pass through, numeric strings are parsed,
/// everything else yields `None`.
pub fn coerce_weight(raw: &serde_json::Value) -> Option<f64> {
    match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Parse a JSON document into the root `TreeNode`.
///
/// The document must be a JSON object; arrays and scalars are rejected even
/// though serde could map a sequence onto the struct.
pub fn parse_tree(body: &str) -> Result<TreeNode> {
    let raw: serde_json::Value = serde_json::from_str(body)?;
    if !raw.is_object() {
        return Err(Error::ParseError(
            "expected a JSON object at the document root".into(),
        ));
    }
    Ok(serde_json::from_value(raw)?)
}
