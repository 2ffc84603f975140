//! Display styling: colors, fonts, smoothing, and edge weight.

use serde::{Deserialize, Serialize};

/// Edge stroke colors in rest/highlight/hover states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeColors {
    pub color: String,
    pub highlight: String,
    pub hover: String,
}

impl EdgeColors {
    pub fn regular() -> Self {
        Self {
            color: "#000".to_string(),
            highlight: "#000".to_string(),
            hover: "#000".to_string(),
        }
    }

    /// Muted styling for literature co-occurrence edges.
    pub fn support() -> Self {
        Self {
            color: "#aaa".to_string(),
            highlight: "#3da4ed".to_string(),
            hover: "#aaa".to_string(),
        }
    }
}

/// Edge label font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFont {
    pub color: String,
    pub align: String,
    pub stroke_color: String,
}

impl EdgeFont {
    pub fn regular() -> Self {
        Self {
            color: "#000".to_string(),
            align: "top".to_string(),
            stroke_color: "#fff".to_string(),
        }
    }

    pub fn support() -> Self {
        Self {
            color: "#777".to_string(),
            align: "middle".to_string(),
            stroke_color: "#fff".to_string(),
        }
    }
}

/// Node fill in rest/highlight/hover states; one background throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeColors {
    pub background: String,
    pub highlight: String,
    pub hover: String,
}

impl NodeColors {
    pub fn uniform(background: &str) -> Self {
        Self {
            background: background.to_string(),
            highlight: background.to_string(),
            hover: background.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    Straight,
    Curved,
}

/// Visual weight for an edge backed by `n` publications.
///
/// Saturating logistic: bounded above by 3.0, monotone in `n`, and a
/// small positive baseline at n = 0 so evidence-free edges stay visible.
pub fn edge_value(publication_count: usize) -> f64 {
    let n = publication_count as f64;
    4.0 / (1.0 + (1.0 - 0.01 * n).exp()) - 1.0
}
