/// `true` if `haystack` contains any of `needles` as a contiguous substring.
///
/// Callers pass a lowercased haystack and lowercase needles.
pub(crate) fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_multi_word_substring() {
        assert!(contains_any("love greek gods honey", &["greek gods"]));
    }

    #[test]
    fn matches_inside_longer_word() {
        // Substring semantics: known false-positive source.
        assert!(contains_any("fagen", &["fage"]));
    }

    #[test]
    fn empty_needles_never_match() {
        let none: [&str; 0] = [];
        assert!(!contains_any("anything", &none));
    }
}
