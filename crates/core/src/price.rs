//! Price display normalization.
//!
//! Event prices are free text. Canonical display values are the literal
//! `"Free"` or a `KSh`-prefixed amount; both the share summary and any
//! listing surface go through [`normalize_price`].

/// The currency marker used for display.
pub const CURRENCY_MARKER: &str = "KSh";

/// Normalize a raw price string for display.
///
/// - `"free"` (any case, surrounding whitespace ignored) renders as `"Free"`;
/// - a value already containing `"ksh"` (any case) passes through, keeping
///   its own casing and spacing apart from surrounding whitespace;
/// - anything else is prefixed with the currency marker.
///
/// Every branch trims surrounding whitespace.
pub fn normalize_price(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("free") {
        return "Free".to_string();
    }
    if trimmed.to_lowercase().contains("ksh") {
        return trimmed.to_string();
    }
    format!("{CURRENCY_MARKER} {trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_is_canonicalized_regardless_of_case() {
        assert_eq!(normalize_price("Free"), "Free");
        assert_eq!(normalize_price("free"), "Free");
        assert_eq!(normalize_price("FREE "), "Free");
    }

    #[test]
    fn bare_amount_gets_currency_prefix() {
        assert_eq!(normalize_price("500"), "KSh 500");
        assert_eq!(normalize_price(" 1000 "), "KSh 1000");
    }

    #[test]
    fn existing_marker_passes_through_unchanged() {
        assert_eq!(normalize_price("KSh 500"), "KSh 500");
        assert_eq!(normalize_price("ksh 250"), "ksh 250");
        assert_eq!(normalize_price("KSH 1,000"), "KSH 1,000");
    }

    #[test]
    fn pass_through_still_trims_surrounding_whitespace() {
        assert_eq!(normalize_price("  KSh 500  "), "KSh 500");
    }
}
