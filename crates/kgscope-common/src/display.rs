//! Human-readable labels for snake_case entity type names.

/// `chemical_substance` → `Chemical Substance`.
pub fn entity_name_display(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_titled() {
        assert_eq!(entity_name_display("chemical_substance"), "Chemical Substance");
        assert_eq!(entity_name_display("gene"), "Gene");
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(entity_name_display("__disease_"), "Disease");
        assert_eq!(entity_name_display(""), "");
    }
}
