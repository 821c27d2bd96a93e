//! Scores how well a candidate name matches what the user has typed so far.

/// Candidates have to score strictly higher than this to be offered.
pub(crate) const SIMILARITY_LIMIT: f64 = 0.25;

/// Returns true if `name` should be offered after the user typed `typed`.
pub(crate) fn is_similar(typed: &str, name: &str) -> bool {
    completion_similarity(typed, name) > SIMILARITY_LIMIT
}

/// Computes a score between 0 and 1 that indicates how closely `typed`
/// matches `name`:
///
/// * a prefix match scores 1, which includes an empty `typed`
/// * a prefix match that ignores case scores 0.75
/// * otherwise the score is at most 0.5 and shrinks with the smallest edit
///   distance between `typed` and any prefix of `name`
pub(crate) fn completion_similarity(typed: &str, name: &str) -> f64 {
    if name.starts_with(typed) {
        return 1.0;
    }

    let typed = typed.to_lowercase();
    let name = name.to_lowercase();
    if name.starts_with(&typed) {
        return 0.75;
    }

    let typed_len = typed.chars().count();
    let smallest_distance = name
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .map(|end| strsim::levenshtein(&name[..end], &typed))
        .min()
        .unwrap_or(typed_len);

    if smallest_distance >= typed_len {
        return 0.0;
    }
    let similarity = (typed_len - smallest_distance) as f64 / typed_len as f64;
    0.5 * similarity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matches() {
        assert_eq!(completion_similarity("cl", "client"), 1.0);
        assert_eq!(completion_similarity("", "anything"), 1.0);
        assert_eq!(completion_similarity("Cl", "client"), 0.75);
        assert_eq!(completion_similarity("client", "client"), 1.0);
    }

    #[test]
    fn empty_prefix_never_filters() {
        for name in ["a", "_private", "__init__", "Ünïcode", ""] {
            assert!(is_similar("", name), "{name} was filtered");
        }
    }

    #[test]
    fn fuzzy_matches() {
        // swapped letters cost two edits
        assert_eq!(completion_similarity("prnit", "printer"), 0.5 * (3.0 / 5.0));
        assert!(is_similar("prnit", "printer"));

        // unrelated names
        assert!(!is_similar("cl", "server"));
        assert!(!is_similar("b", "a"));
        assert!(!is_similar("xyz", "abc"));
    }
}
