//! Wire model for raw answer subgraphs.

use serde::{Deserialize, Serialize};

/// Edge type marking literature co-occurrence evidence rather than a
/// declared semantic relation.
pub const SUPPORT_EDGE_TYPE: &str = "literature_co-occurrence";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
}

/// Publications as they arrive on the wire: a single id or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Publications {
    One(String),
    Many(Vec<String>),
}

impl Publications {
    /// Coerce the inconsistent wire shape to a list; absent becomes empty.
    pub fn into_list(value: Option<Publications>) -> Vec<String> {
        match value {
            None => Vec::new(),
            Some(Publications::One(publication)) => vec![publication],
            Some(Publications::Many(publications)) => publications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Publications>,
}

impl RawEdge {
    pub fn is_support(&self) -> bool {
        self.edge_type == SUPPORT_EDGE_TYPE
    }
}

/// A raw answer subgraph. `node_list` stays optional to mirror the wire:
/// a graph-like value without it means "nothing to render", not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSubgraph {
    #[serde(default)]
    pub node_list: Option<Vec<GraphNode>>,
    #[serde(default)]
    pub edge_list: Vec<RawEdge>,
}

/// Endpoint pair ignoring direction; A→B and B→A compare equal.
pub(crate) fn unordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
