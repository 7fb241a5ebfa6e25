//! Tag-string parsing for event submissions.

/// Parse a comma-separated tag string into an ordered tag list.
///
/// Each piece is trimmed and lower-cased; empty pieces are discarded.
/// Duplicates are kept as entered -- deduplication is not enforced.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_lowercases() {
        let tags = parse_tags("Music, Outdoor ,  Family-Friendly");
        assert_eq!(tags, vec!["music", "outdoor", "family-friendly"]);
    }

    #[test]
    fn discards_empty_pieces() {
        let tags = parse_tags("music,, ,outdoor,");
        assert_eq!(tags, vec!["music", "outdoor"]);
    }

    #[test]
    fn empty_input_yields_no_tags() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  ,  ").is_empty());
    }

    #[test]
    fn preserves_entry_order_and_duplicates() {
        let tags = parse_tags("jazz, food, Jazz");
        assert_eq!(tags, vec!["jazz", "food", "jazz"]);
    }
}
