//! View settings and file-loadable configuration.

use serde::{Deserialize, Serialize};

use crate::concepts::DEFAULT_CONCEPTS;
use crate::error::{KgscopeError, Result};

/// Requested arrangement for the rendered subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Let the layout policy decide from the graph shape.
    #[default]
    Auto,
    /// Hierarchical, top-down.
    Vertical,
    /// Hierarchical, left-right.
    Horizontal,
}

/// Per-render display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default)]
    pub layout_style: LayoutStyle,

    /// Seed for the force-directed simulation, kept fixed so repeated
    /// renders of the same graph land in the same arrangement.
    #[serde(default)]
    pub layout_random_seed: u64,

    /// Show surviving literature co-occurrence edges.
    #[serde(default)]
    pub show_support: bool,

    /// Blank out all edge labels.
    #[serde(default)]
    pub omit_edge_label: bool,

    /// Render surface height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_height() -> u32 {
    500
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            layout_style: LayoutStyle::Auto,
            layout_random_seed: 0,
            show_support: false,
            omit_edge_label: false,
            height: default_height(),
        }
    }
}

/// Complete view configuration, loadable from TOML, YAML, or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Known semantic types; input order is irrelevant, the color map
    /// sorts its vocabulary.
    #[serde(default = "default_concepts")]
    pub concepts: Vec<String>,

    #[serde(default)]
    pub view: ViewSettings,
}

fn default_concepts() -> Vec<String> {
    DEFAULT_CONCEPTS.iter().map(|c| c.to_string()).collect()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            concepts: default_concepts(),
            view: ViewSettings::default(),
        }
    }
}

impl ViewConfig {
    /// Load from a TOML file
    pub fn from_toml(path: &str) -> Result<Self> {
        let content = read(path)?;
        toml::from_str(&content).map_err(|e| KgscopeError::Config(e.to_string()))
    }

    /// Load from a YAML file
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = read(path)?;
        serde_yaml::from_str(&content).map_err(|e| KgscopeError::Config(e.to_string()))
    }

    /// Load from a JSON file
    pub fn from_json(path: &str) -> Result<Self> {
        let content = read(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn read(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| KgscopeError::Config(format!("{path}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.view.layout_style, LayoutStyle::Auto);
        assert_eq!(config.view.layout_random_seed, 0);
        assert!(!config.view.show_support);
        assert!(!config.view.omit_edge_label);
        assert_eq!(config.view.height, 500);
        assert_eq!(config.concepts.len(), DEFAULT_CONCEPTS.len());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ViewConfig = toml::from_str(
            r#"
            [view]
            layout_style = "vertical"
            show_support = true
            "#,
        )
        .unwrap();
        assert_eq!(config.view.layout_style, LayoutStyle::Vertical);
        assert!(config.view.show_support);
        assert_eq!(config.view.height, 500);
        assert_eq!(config.concepts.len(), DEFAULT_CONCEPTS.len());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ViewConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ViewConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
