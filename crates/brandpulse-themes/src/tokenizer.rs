//! Social-post tokenizer.
//!
//! Keeps URLs, mentions, hashtags and emoticons whole, keeps inner
//! apostrophes and hyphens inside words, and splits every other non-space
//! character into its own token so punctuation survives as separate tokens.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          https?://\S+                              # URLs
        | [@\#]\w+                                  # mentions and hashtags
        | <3                                        # heart
        | [<>]?[:;=][\-o\*']?[\)\]\(\[dDpP/\}\{@\|\\] # emoticons
        | \d+(?:[.,]\d+)+                           # decimals and grouped numbers
        | \w+(?:['’\-]\w+)*                          # words, with inner ' ’ -
        | \.{3,} | …                                # ellipses
        | [^\s\x{FE0F}]\x{FE0F}?                    # anything else, plus a trailing U+FE0F
        ",
    )
    .expect("valid token regex")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into tokens, preserving case.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::new().tokenize(text)
    }

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(tokens("Love it!"), vec!["Love", "it", "!"]);
    }

    #[test]
    fn keeps_mentions_hashtags_and_urls_whole() {
        assert_eq!(
            tokens("@Chobani_UK #breakfast https://example.com/a?b=1"),
            vec!["@Chobani_UK", "#breakfast", "https://example.com/a?b=1"]
        );
    }

    #[test]
    fn keeps_inner_apostrophes_and_hyphens() {
        assert_eq!(
            tokens("that's dairy-free, isn’t it"),
            vec!["that's", "dairy-free", ",", "isn’t", "it"]
        );
    }

    #[test]
    fn recognises_emoticons_and_ellipses() {
        assert_eq!(
            tokens("so good :) wait... ok… <3"),
            vec!["so", "good", ":)", "wait", "...", "ok", "…", "<3"]
        );
    }

    #[test]
    fn emoji_keeps_its_presentation_selector() {
        assert_eq!(tokens("Chobani ❤\u{fe0f}"), vec!["Chobani", "❤\u{fe0f}"]);
        assert_eq!(tokens("\u{fe0f}"), Vec::<String>::new());
    }

    #[test]
    fn keeps_decimal_numbers() {
        assert_eq!(tokens("only 2.5 grams"), vec!["only", "2.5", "grams"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokens("   ").is_empty());
    }
}
