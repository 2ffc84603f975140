//! Renderable output handed to the drawing surface.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutOptions;
use crate::style::{EdgeColors, EdgeFont, NodeColors, Smoothing};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    pub label: String,
    pub color: NodeColors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Deduplicated after support-edge folding.
    pub publications: Vec<String>,
    /// Merge bookkeeping; always false on surviving edges.
    pub duplicate_edge: bool,
    /// Another regular edge spans the same node pair; render curved.
    pub more_than_one_edge: bool,
    pub label: String,
    /// Visual weight from the publication count.
    pub value: f64,
    pub smooth: Smoothing,
    pub colors: EdgeColors,
    pub font: EdgeFont,
    /// Support edges sit outside the physics simulation.
    pub physics: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayGraph {
    pub nodes: Vec<DisplayNode>,
    pub edges: Vec<DisplayEdge>,
}

impl DisplayGraph {
    /// Resolve clicked edge ids from the rendering surface back to the
    /// full edge records. Unknown ids are skipped.
    pub fn resolve_edges<'a>(&'a self, ids: &[String]) -> Vec<&'a DisplayEdge> {
        ids.iter()
            .filter_map(|id| self.edges.iter().find(|edge| &edge.id == id))
            .collect()
    }
}

/// What the renderer consumes: the styled graph plus the layout decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgraphView {
    pub graph: DisplayGraph,
    pub layout: LayoutOptions,
}
