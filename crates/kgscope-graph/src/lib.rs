//! kgscope-graph — Subgraph normalization and layout policy.
//!
//! Turns a raw answer subgraph (possibly-redundant edges, separate
//! literature co-occurrence evidence) into a single deduplicated, styled,
//! edge-weighted graph description plus a layout decision for the
//! rendering surface.

pub mod model;
pub mod style;
pub mod normalize;
pub mod layout;
pub mod view;

pub use model::{GraphNode, Publications, RawEdge, RawSubgraph, SUPPORT_EDGE_TYPE};
pub use normalize::normalize_subgraph;
pub use view::{DisplayEdge, DisplayGraph, DisplayNode, SubgraphView};
