//! Helpers for the negative prompt, a comma separated list of things the
//! generator should avoid.

/// Terms offered as one-click additions.
pub const COMMON_NEGATIVE_TERMS: [&str; 5] =
    ["blurry", "low quality", "distorted", "watermark", "text"];

pub fn has_term(current: &str, term: &str) -> bool {
    let term = term.trim();
    current
        .split(',')
        .any(|existing| existing.trim().eq_ignore_ascii_case(term))
}

/// Appends `term` to the list unless an equal term (ignoring ASCII case and
/// surrounding whitespace) is already present.
pub fn append_term(current: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() || has_term(current, term) {
        return current.to_string();
    }
    let head = current.trim_end().trim_end_matches(',').trim_end();
    if head.is_empty() {
        term.to_string()
    } else {
        format!("{head}, {term}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_to_empty() {
        assert_eq!(append_term("", "blurry"), "blurry");
        assert_eq!(append_term("   ", "blurry"), "blurry");
    }

    #[test]
    fn append_separates_with_comma() {
        assert_eq!(append_term("blurry", "text"), "blurry, text");
        assert_eq!(append_term("blurry, ", "text"), "blurry, text");
    }

    #[test]
    fn duplicates_are_ignored() {
        assert_eq!(append_term("Blurry, text", "blurry"), "Blurry, text");
        assert!(has_term("low quality , watermark", "low quality"));
        assert!(!has_term("low quality", "quality"));
    }

    #[test]
    fn blank_term_is_ignored() {
        assert_eq!(append_term("blurry", "  "), "blurry");
    }
}
