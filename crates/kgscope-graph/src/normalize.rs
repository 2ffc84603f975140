//! Subgraph normalization: support-edge folding, dedup, and decoration.
//!
//! The pipeline is a sequence of staged pure functions, each producing a
//! new collection. Stage order matters: support evidence is folded into
//! regular edges before anything is dropped, parallel-edge flags are
//! computed independently of the folding, and the straggler collapse runs
//! over whatever remains.

use std::collections::HashSet;

use tracing::debug;

use kgscope_common::{TypeColorMap, ViewSettings, UNDEFINED_COLOR};

use crate::layout::select_layout;
use crate::model::{unordered_pair, GraphNode, Publications, RawEdge, RawSubgraph, SUPPORT_EDGE_TYPE};
use crate::style::{edge_value, EdgeColors, EdgeFont, NodeColors, Smoothing};
use crate::view::{DisplayEdge, DisplayGraph, DisplayNode, SubgraphView};

/// Edge in flight between stages, carrying merge bookkeeping.
#[derive(Debug, Clone)]
struct WorkEdge {
    id: String,
    source_id: String,
    target_id: String,
    edge_type: String,
    publications: Vec<String>,
    duplicate_edge: bool,
    more_than_one_edge: bool,
}

impl WorkEdge {
    fn same_pair(&self, other: &WorkEdge) -> bool {
        unordered_pair(&self.source_id, &self.target_id)
            == unordered_pair(&other.source_id, &other.target_id)
    }
}

/// Normalize a raw answer subgraph into a renderable view.
///
/// Returns `None` when the input has no node collection — the caller
/// renders nothing. Every other input yields a complete view; the
/// transform is pure and idempotent, so the renderer's remount/diff
/// strategy sees identical output for identical input.
pub fn normalize_subgraph(
    raw: &RawSubgraph,
    colors: &TypeColorMap,
    settings: &ViewSettings,
) -> Option<SubgraphView> {
    let node_list = raw.node_list.as_ref()?;

    let nodes = style_nodes(node_list, colors);

    let (support, regular) = partition_edges(&raw.edge_list);
    let (support, regular) = merge_support(support, regular);
    let regular = flag_parallel_edges(regular);

    // Surviving support edges first, then regular edges; the straggler
    // collapse keeps the first edge per pair in this order.
    let merged: Vec<WorkEdge> = support
        .into_iter()
        .filter(|edge| !edge.duplicate_edge)
        .chain(regular)
        .collect();
    let collapsed = collapse_stragglers(merged);

    let mut edges: Vec<DisplayEdge> = collapsed
        .into_iter()
        .map(|edge| decorate(edge, settings))
        .collect();

    if !settings.show_support {
        edges.retain(|edge| edge.edge_type != SUPPORT_EDGE_TYPE);
    }

    let layout = select_layout(nodes.len(), &edges, settings);
    debug!(nodes = nodes.len(), edges = edges.len(), "normalized subgraph");

    Some(SubgraphView {
        graph: DisplayGraph { nodes, edges },
        layout,
    })
}

fn style_nodes(nodes: &[GraphNode], colors: &TypeColorMap) -> Vec<DisplayNode> {
    nodes
        .iter()
        .map(|node| {
            let background = colors.color_for(&node.node_type).unwrap_or(UNDEFINED_COLOR);
            DisplayNode {
                id: node.id.clone(),
                node_type: node.node_type.clone(),
                name: node.name.clone(),
                label: node.name.clone(),
                color: NodeColors::uniform(background),
            }
        })
        .collect()
}

/// Split raw edges into support and regular, coercing publications to a
/// list on the way in.
fn partition_edges(edges: &[RawEdge]) -> (Vec<WorkEdge>, Vec<WorkEdge>) {
    let mut support = Vec::new();
    let mut regular = Vec::new();
    for edge in edges {
        let work = WorkEdge {
            id: edge.id.clone(),
            source_id: edge.source_id.clone(),
            target_id: edge.target_id.clone(),
            edge_type: edge.edge_type.clone(),
            publications: Publications::into_list(edge.publications.clone()),
            duplicate_edge: false,
            more_than_one_edge: false,
        };
        if edge.is_support() {
            support.push(work);
        } else {
            regular.push(work);
        }
    }
    (support, regular)
}

/// Fold support evidence into regular edges over the same node pair.
///
/// First match by support-list scan order wins; the matched support edge
/// donates its publications (union, first-seen order) and is marked for
/// removal. A support edge may donate to several regular edges but is
/// dropped once.
fn merge_support(
    mut support: Vec<WorkEdge>,
    regular: Vec<WorkEdge>,
) -> (Vec<WorkEdge>, Vec<WorkEdge>) {
    let regular = regular
        .into_iter()
        .map(|mut edge| {
            if let Some(matched) = support.iter_mut().find(|s| s.same_pair(&edge)) {
                matched.duplicate_edge = true;
                let mut union: Vec<String> = Vec::new();
                for publication in edge.publications.iter().chain(matched.publications.iter()) {
                    if !union.contains(publication) {
                        union.push(publication.clone());
                    }
                }
                edge.publications = union;
            }
            edge
        })
        .collect();
    (support, regular)
}

/// Flag every regular edge that shares its node pair with another
/// regular edge. Computed independently of support folding; the flag
/// alone drives curved rendering.
fn flag_parallel_edges(mut regular: Vec<WorkEdge>) -> Vec<WorkEdge> {
    let keys: Vec<(String, String)> = regular
        .iter()
        .map(|edge| {
            let (a, b) = unordered_pair(&edge.source_id, &edge.target_id);
            (a.to_string(), b.to_string())
        })
        .collect();
    for (index, edge) in regular.iter_mut().enumerate() {
        edge.more_than_one_edge = keys
            .iter()
            .enumerate()
            .any(|(other, key)| other != index && *key == keys[index]);
    }
    regular
}

/// Keep only the first edge per unordered node pair. Guards against
/// exact duplicates the merge stages cannot see, e.g. two identical
/// support edges. Parallel-edge flags are not recomputed afterwards.
fn collapse_stragglers(edges: Vec<WorkEdge>) -> Vec<WorkEdge> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    edges
        .into_iter()
        .filter(|edge| {
            let (a, b) = unordered_pair(&edge.source_id, &edge.target_id);
            seen.insert((a.to_string(), b.to_string()))
        })
        .collect()
}

fn decorate(edge: WorkEdge, settings: &ViewSettings) -> DisplayEdge {
    let publication_count = edge.publications.len();
    let is_support = edge.edge_type == SUPPORT_EDGE_TYPE;

    let label = if settings.omit_edge_label {
        String::new()
    } else if is_support {
        // Type name omitted to keep support edges visually minimal
        publication_count.to_string()
    } else if publication_count > 0 {
        format!("{} ({})", edge.edge_type, publication_count)
    } else {
        edge.edge_type.clone()
    };

    let smooth = if edge.more_than_one_edge {
        Smoothing::Curved
    } else {
        Smoothing::Straight
    };

    let (colors, font, physics) = if is_support {
        (EdgeColors::support(), EdgeFont::support(), false)
    } else {
        (EdgeColors::regular(), EdgeFont::regular(), true)
    };

    DisplayEdge {
        id: edge.id,
        source_id: edge.source_id,
        target_id: edge.target_id,
        edge_type: edge.edge_type,
        publications: edge.publications,
        duplicate_edge: edge.duplicate_edge,
        more_than_one_edge: edge.more_than_one_edge,
        label,
        value: edge_value(publication_count),
        smooth,
        colors,
        font,
        physics,
    }
}
