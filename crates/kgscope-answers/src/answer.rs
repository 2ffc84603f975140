//! Ranked answer records as supplied by the answer list surface.

use serde::{Deserialize, Serialize};

use kgscope_graph::model::RawSubgraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    /// Ranker confidence in [0, 1].
    pub confidence: f64,
    pub text: String,
    /// The answer's subgraph, fed to the normalizer when displayed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_graph: Option<RawSubgraph>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_without_graph_deserializes() {
        let answer: Answer =
            serde_json::from_str(r#"{"id": 7, "confidence": 0.912, "text": "imatinib"}"#).unwrap();
        assert_eq!(answer.id, 7);
        assert!(answer.result_graph.is_none());
    }
}
