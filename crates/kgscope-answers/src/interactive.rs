//! Per-position candidate selection for the interactive answer explorer.

use serde::{Deserialize, Serialize};

/// One candidate entity for a query-node position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeChoice {
    pub id: String,
    pub name: String,
    pub score: f64,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Tracks which candidate is pinned at each query-node position.
#[derive(Debug, Clone, Default)]
pub struct InteractiveSelection {
    possibilities: Vec<Vec<NodeChoice>>,
    selection: Vec<Option<String>>,
}

impl InteractiveSelection {
    pub fn new(possibilities: Vec<Vec<NodeChoice>>) -> Self {
        let selection = vec![None; possibilities.len()];
        Self {
            possibilities,
            selection,
        }
    }

    pub fn positions(&self) -> usize {
        self.possibilities.len()
    }

    pub fn possibilities(&self, position: usize) -> &[NodeChoice] {
        &self.possibilities[position]
    }

    /// Pin a candidate at a position. Ids not in the position's
    /// candidate list are ignored (stale options from a previous result
    /// set) and leave the selection unchanged.
    pub fn select(&mut self, position: usize, choice_id: &str) -> bool {
        let known = self.possibilities[position]
            .iter()
            .any(|choice| choice.id == choice_id);
        if known {
            self.selection[position] = Some(choice_id.to_string());
        }
        known
    }

    pub fn clear(&mut self, position: usize) {
        self.selection[position] = None;
    }

    pub fn clear_all(&mut self) {
        for slot in &mut self.selection {
            *slot = None;
        }
    }

    pub fn selected_id(&self, position: usize) -> Option<&str> {
        self.selection[position].as_deref()
    }

    /// Explicitly pinned by the user, as opposed to locked by having a
    /// single candidate.
    pub fn is_explicit(&self, position: usize) -> bool {
        self.selection[position].is_some()
    }

    /// A position counts as locked when explicitly pinned or when only
    /// one candidate exists.
    pub fn is_locked(&self, position: usize) -> bool {
        self.is_explicit(position) || self.possibilities[position].len() == 1
    }

    /// Whether the reset-all affordance applies.
    pub fn has_any_selection(&self) -> bool {
        self.selection.iter().any(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: &str, name: &str, score: f64) -> NodeChoice {
        NodeChoice {
            id: id.to_string(),
            name: name.to_string(),
            score,
            node_type: "gene".to_string(),
        }
    }

    fn two_positions() -> InteractiveSelection {
        InteractiveSelection::new(vec![
            vec![choice("g1", "KRAS", 0.9), choice("g2", "TP53", 0.5)],
            vec![choice("d1", "pancreatic cancer", 0.8)],
        ])
    }

    #[test]
    fn test_select_and_clear() {
        let mut selection = two_positions();
        assert!(selection.select(0, "g2"));
        assert_eq!(selection.selected_id(0), Some("g2"));
        assert!(selection.has_any_selection());

        selection.clear(0);
        assert_eq!(selection.selected_id(0), None);
        assert!(!selection.has_any_selection());
    }

    #[test]
    fn test_unknown_choice_ignored() {
        let mut selection = two_positions();
        assert!(!selection.select(0, "d1"));
        assert_eq!(selection.selected_id(0), None);
    }

    #[test]
    fn test_single_candidate_locks_without_selection() {
        let selection = two_positions();
        assert!(selection.is_locked(1));
        assert!(!selection.is_explicit(1));
        assert!(!selection.is_locked(0));
    }

    #[test]
    fn test_clear_all() {
        let mut selection = two_positions();
        selection.select(0, "g1");
        selection.select(1, "d1");
        selection.clear_all();
        assert!(!selection.has_any_selection());
    }
}
