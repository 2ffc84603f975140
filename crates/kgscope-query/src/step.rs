//! Query steps as authored in the question builder.

use serde::{Deserialize, Serialize};

/// One step of the path being asked about. Order encodes the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QueryStep {
    /// A concrete entity pinned to a curie.
    #[serde(rename = "Named Node", rename_all = "camelCase")]
    Named { name: String, name_id: String },

    /// Any entity of one semantic type.
    #[serde(rename = "Node Type", rename_all = "camelCase")]
    Typed { node_type: String },

    /// A variable-length stretch of unspecified nodes between two
    /// node-producing steps.
    #[serde(rename = "Unspecified Nodes", rename_all = "camelCase")]
    Gap { num_nodes_min: u32, num_nodes_max: u32 },
}

impl QueryStep {
    pub fn is_gap(&self) -> bool {
        matches!(self, QueryStep::Gap { .. })
    }

    /// Short card label shown in the builder list.
    pub fn display_label(&self) -> String {
        match self {
            QueryStep::Named { name, .. } => name.clone(),
            QueryStep::Typed { node_type } => node_type.clone(),
            QueryStep::Gap {
                num_nodes_min,
                num_nodes_max,
            } => format!("?[{num_nodes_min}...{num_nodes_max}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tagging() {
        let step: QueryStep = serde_json::from_str(
            r#"{"type": "Named Node", "name": "aspirin", "nameId": "CHEBI:15365"}"#,
        )
        .unwrap();
        assert_eq!(
            step,
            QueryStep::Named {
                name: "aspirin".to_string(),
                name_id: "CHEBI:15365".to_string(),
            }
        );

        let step: QueryStep = serde_json::from_str(
            r#"{"type": "Unspecified Nodes", "numNodesMin": 0, "numNodesMax": 2}"#,
        )
        .unwrap();
        assert!(step.is_gap());
    }

    #[test]
    fn test_display_labels() {
        let named = QueryStep::Named {
            name: "aspirin".to_string(),
            name_id: "CHEBI:15365".to_string(),
        };
        assert_eq!(named.display_label(), "aspirin");

        let typed = QueryStep::Typed {
            node_type: "disease".to_string(),
        };
        assert_eq!(typed.display_label(), "disease");

        let gap = QueryStep::Gap {
            num_nodes_min: 0,
            num_nodes_max: 2,
        };
        assert_eq!(gap.display_label(), "?[0...2]");
    }
}
