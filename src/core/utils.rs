/// Case-insensitive substring match shared by the search overlay. Empty
/// queries match everything so callers can pass the raw input through.
pub fn text_matches_search(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Same check against an optional field; a missing field never matches.
pub fn optional_matches_search(text: Option<&str>, query: &str) -> bool {
    text.map(|t| text_matches_search(t, query)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert!(text_matches_search("Category", "cat"));
        assert!(text_matches_search("category", "CAT"));
        assert!(!text_matches_search("dog", "cat"));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(optional_matches_search(Some("no relation"), "relation"));
        assert!(!optional_matches_search(None, "relation"));
        assert!(!optional_matches_search(None, ""));
    }
}
