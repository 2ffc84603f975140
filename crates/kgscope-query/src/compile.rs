//! Compile an ordered step sequence into a machine question.

use serde::{Deserialize, Serialize};

use kgscope_common::error::{KgscopeError, Result};

use crate::step::QueryStep;

/// Compiled node. Ids are dense and zero-based over node-producing
/// steps only; gap steps contribute no node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryNode {
    pub id: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curie: Option<String>,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

/// Compiled edge with explicit path-length bounds. Bounds are 1/1 for a
/// direct hop, or gap bounds plus one when a gap sits between the
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEdge {
    pub source_id: usize,
    pub target_id: usize,
    pub min_length: u32,
    pub max_length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineQuestion {
    pub nodes: Vec<QueryNode>,
    pub edges: Vec<QueryEdge>,
}

/// Draft payload for the question-creation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub name: String,
    pub natural_question: String,
    pub notes: String,
    pub machine_question: MachineQuestion,
}

/// Compile query steps into the node and edge lists of a machine
/// question. Fails with `InvalidQueryShape` when a gap step is first,
/// last, or adjacent to another gap; no partial result is returned.
pub fn compile_steps(steps: &[QueryStep]) -> Result<MachineQuestion> {
    validate_shape(steps)?;

    let mut nodes = Vec::new();
    for step in steps {
        match step {
            QueryStep::Named { name, name_id } => nodes.push(QueryNode {
                id: nodes.len(),
                curie: Some(name_id.clone()),
                name: name.clone(),
                node_type: None,
            }),
            QueryStep::Typed { node_type } => nodes.push(QueryNode {
                id: nodes.len(),
                curie: None,
                name: node_type.clone(),
                node_type: Some(node_type.clone()),
            }),
            QueryStep::Gap { .. } => {}
        }
    }

    let mut edges = Vec::new();
    let mut emitted = 0usize;
    for (position, step) in steps.iter().enumerate() {
        if step.is_gap() {
            // Gaps emit no edge; they widen the edge that spans them
            continue;
        }
        emitted += 1;
        if emitted == 1 {
            continue;
        }
        let (min_length, max_length) = match steps[position - 1] {
            QueryStep::Gap {
                num_nodes_min,
                num_nodes_max,
            } => (num_nodes_min + 1, num_nodes_max + 1),
            _ => (1, 1),
        };
        edges.push(QueryEdge {
            source_id: emitted - 2,
            target_id: emitted - 1,
            min_length,
            max_length,
        });
    }

    Ok(MachineQuestion { nodes, edges })
}

fn validate_shape(steps: &[QueryStep]) -> Result<()> {
    for (position, step) in steps.iter().enumerate() {
        if !step.is_gap() {
            continue;
        }
        let at_boundary = position == 0 || position == steps.len() - 1;
        let after_gap = position > 0 && steps[position - 1].is_gap();
        if at_boundary || after_gap {
            return Err(KgscopeError::InvalidQueryShape { position });
        }
    }
    Ok(())
}
