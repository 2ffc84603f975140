//! Layout policy: hierarchical arrangement vs. seeded physics simulation.

use serde::{Deserialize, Serialize};

use kgscope_common::{LayoutStyle, ViewSettings};

use crate::view::DisplayEdge;

/// Barnes–Hut tuning for the force-directed mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsOptions {
    pub min_velocity: f64,
    pub gravitational_constant: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
    pub damping: f64,
    pub avoid_overlap: f64,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            min_velocity: 0.75,
            gravitational_constant: -1000.0,
            central_gravity: 0.3,
            spring_length: 200.0,
            spring_constant: 0.05,
            damping: 0.95,
            avoid_overlap: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyDirection {
    TopDown,
    LeftRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchicalOptions {
    pub direction: HierarchyDirection,
    pub level_separation: f64,
    pub node_spacing: f64,
    pub tree_spacing: f64,
    pub block_shifting: bool,
    pub edge_minimization: bool,
    pub parent_centralization: bool,
    pub sort_method: String,
}

impl HierarchicalOptions {
    fn with_direction(direction: HierarchyDirection) -> Self {
        Self {
            direction,
            level_separation: 500.0,
            node_spacing: 200.0,
            tree_spacing: 200.0,
            block_shifting: true,
            edge_minimization: true,
            parent_centralization: true,
            sort_method: "directed".to_string(),
        }
    }
}

/// The layout decision the renderer consumes, exactly one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutOptions {
    /// Physics disabled, directed arrangement.
    Hierarchical { hierarchical: HierarchicalOptions },
    /// Seeded simulation for reproducible placement.
    ForceDirected {
        random_seed: u64,
        physics: PhysicsOptions,
    },
}

impl LayoutOptions {
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, LayoutOptions::Hierarchical { .. })
    }
}

/// Choose the layout for a normalized graph.
///
/// Parallel edges force the physics mode: a hierarchical arrangement
/// cannot separate them. Explicit vertical/horizontal preferences and
/// graphs under 3 nodes get a hierarchical layout; everything else runs
/// the seeded simulation, with raised overlap avoidance under 31 nodes.
pub fn select_layout(
    node_count: usize,
    edges: &[DisplayEdge],
    settings: &ViewSettings,
) -> LayoutOptions {
    let has_parallel_edges = edges.iter().any(|edge| edge.more_than_one_edge);

    let wants_hierarchy = matches!(
        settings.layout_style,
        LayoutStyle::Vertical | LayoutStyle::Horizontal
    ) || node_count < 3;

    if !has_parallel_edges && wants_hierarchy {
        let direction = match settings.layout_style {
            LayoutStyle::Vertical => HierarchyDirection::TopDown,
            _ => HierarchyDirection::LeftRight,
        };
        return LayoutOptions::Hierarchical {
            hierarchical: HierarchicalOptions::with_direction(direction),
        };
    }

    let mut physics = PhysicsOptions::default();
    if node_count < 31 {
        physics.avoid_overlap = 1.0;
    }
    LayoutOptions::ForceDirected {
        random_seed: settings.layout_random_seed,
        physics,
    }
}
