//! Semantic-type vocabulary and the type→color assignment.

/// Fallback fill for types outside the vocabulary.
pub const UNDEFINED_COLOR: &str = "#cccccc";

/// Display palette, one entry per vocabulary slot.
pub const PALETTE: [&str; 11] = [
    "#fbb4ae", // red
    "#b3cde3", // blue
    "#ccebc5", // green
    "#decbe4", // purple
    "#fed9a6", // orange
    "#ffffcc", // yellow
    "#e5d8bd", // brown
    "#b3de69", // darker green
    "#fddaec", // pink
    "#fccde5", // light grayish pink
    "#f2f2f2", // silver
];

/// Default vocabulary of known semantic types.
pub const DEFAULT_CONCEPTS: [&str; 10] = [
    "anatomical_entity",
    "biological_process",
    "cell",
    "chemical_substance",
    "disease",
    "gene",
    "genetic_condition",
    "molecular_function",
    "pathway",
    "phenotypic_feature",
];

/// Deterministic mapping from a semantic type to a palette color.
///
/// The vocabulary is sorted lexicographically once at construction; a
/// type maps to the palette entry at its sorted index modulo palette
/// length. Pure function of (palette, vocabulary): the same type always
/// gets the same color, so re-renders stay visually consistent.
#[derive(Debug, Clone)]
pub struct TypeColorMap {
    sorted: Vec<String>,
}

impl TypeColorMap {
    pub fn new<I, S>(concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sorted: Vec<String> = concepts.into_iter().map(Into::into).collect();
        sorted.sort();
        Self { sorted }
    }

    pub fn with_default_concepts() -> Self {
        Self::new(DEFAULT_CONCEPTS)
    }

    /// Color for a semantic type, `None` when the type is not in the
    /// vocabulary. Callers supply their own fallback (`UNDEFINED_COLOR`).
    pub fn color_for(&self, node_type: &str) -> Option<&'static str> {
        self.sorted
            .binary_search_by(|known| known.as_str().cmp(node_type))
            .ok()
            .map(|index| PALETTE[index % PALETTE.len()])
    }
}

impl Default for TypeColorMap {
    fn default() -> Self {
        Self::with_default_concepts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_in_sorted_order() {
        let map = TypeColorMap::with_default_concepts();
        // Default vocabulary is already alphabetical
        assert_eq!(map.color_for("anatomical_entity"), Some("#fbb4ae"));
        assert_eq!(map.color_for("disease"), Some("#fed9a6"));
        assert_eq!(map.color_for("phenotypic_feature"), Some("#fccde5"));
    }

    #[test]
    fn test_unknown_type_is_none() {
        let map = TypeColorMap::with_default_concepts();
        assert_eq!(map.color_for("protein"), None);
    }

    #[test]
    fn test_deterministic_across_instances() {
        let a = TypeColorMap::with_default_concepts();
        let b = TypeColorMap::with_default_concepts();
        for concept in DEFAULT_CONCEPTS {
            assert_eq!(a.color_for(concept), b.color_for(concept));
        }
    }

    #[test]
    fn test_caller_supplied_vocabulary_sorts_first() {
        // Unsorted input; "disease" sorts ahead of "gene"
        let map = TypeColorMap::new(["gene", "disease"]);
        assert_eq!(map.color_for("disease"), Some(PALETTE[0]));
        assert_eq!(map.color_for("gene"), Some(PALETTE[1]));
    }

    #[test]
    fn test_vocabulary_longer_than_palette_wraps() {
        let concepts: Vec<String> = (0..PALETTE.len() + 2).map(|i| format!("type_{i:02}")).collect();
        let map = TypeColorMap::new(concepts);
        assert_eq!(map.color_for("type_00"), Some(PALETTE[0]));
        assert_eq!(map.color_for(&format!("type_{:02}", PALETTE.len())), Some(PALETTE[0]));
    }
}
