//! The shared keyword corpus.
//!
//! Loaded once per run and never mutated afterwards. Brand-scoped variations
//! (a nonspecific brand dropping its own name from the competitor list) are
//! built as fresh vectors via [`KeywordCorpus::brand_names_excluding`].

use std::path::Path;

use serde::Deserialize;

use crate::brands::normalize_terms;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
struct KeywordsFile {
    category_keywords: Vec<String>,
    adjacent_keywords: Vec<String>,
    brand_names: Vec<String>,
    brand_accounts: Vec<String>,
}

/// Four lowercase keyword lists shared by every brand evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCorpus {
    category_keywords: Vec<String>,
    adjacent_keywords: Vec<String>,
    brand_names: Vec<String>,
    brand_accounts: Vec<String>,
}

impl KeywordCorpus {
    /// Build a corpus from raw lists. Entries are trimmed, lowercased and
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `category_keywords` ends up empty.
    pub fn new(
        category_keywords: Vec<String>,
        adjacent_keywords: Vec<String>,
        brand_names: Vec<String>,
        brand_accounts: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let corpus = Self {
            category_keywords: normalize_terms(category_keywords),
            adjacent_keywords: normalize_terms(adjacent_keywords),
            brand_names: normalize_terms(brand_names),
            brand_accounts: normalize_terms(brand_accounts),
        };

        if corpus.category_keywords.is_empty() {
            return Err(ConfigError::Validation(
                "keyword corpus must define at least one category keyword".to_string(),
            ));
        }

        Ok(corpus)
    }

    #[must_use]
    pub fn category_keywords(&self) -> &[String] {
        &self.category_keywords
    }

    #[must_use]
    pub fn adjacent_keywords(&self) -> &[String] {
        &self.adjacent_keywords
    }

    #[must_use]
    pub fn brand_names(&self) -> &[String] {
        &self.brand_names
    }

    #[must_use]
    pub fn brand_accounts(&self) -> &[String] {
        &self.brand_accounts
    }

    /// Competitor brand names with `name` removed.
    ///
    /// A brand that never appeared in the list yields an unchanged copy.
    #[must_use]
    pub fn brand_names_excluding(&self, name: &str) -> Vec<String> {
        let name = name.to_lowercase();
        self.brand_names
            .iter()
            .filter(|n| **n != name)
            .cloned()
            .collect()
    }

    /// Every corpus entry across all four lists.
    pub fn all_terms(&self) -> impl Iterator<Item = &str> {
        self.category_keywords
            .iter()
            .chain(&self.adjacent_keywords)
            .chain(&self.brand_names)
            .chain(&self.brand_accounts)
            .map(String::as_str)
    }
}

/// Load the keyword corpus from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_corpus(path: &Path) -> Result<KeywordCorpus, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: KeywordsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::KeywordsFileParse)?;

    KeywordCorpus::new(
        file.category_keywords,
        file.adjacent_keywords,
        file.brand_names,
        file.brand_accounts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn sample() -> KeywordCorpus {
        KeywordCorpus::new(
            strings(&["Yogurt", "probiotic"]),
            strings(&["breakfast"]),
            strings(&["wallaby", "chobani"]),
            strings(&["@chobani"]),
        )
        .unwrap()
    }

    #[test]
    fn new_lowercases_entries() {
        assert_eq!(sample().category_keywords(), ["yogurt", "probiotic"]);
    }

    #[test]
    fn new_rejects_empty_category_list() {
        let err = KeywordCorpus::new(vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("category keyword"));
    }

    #[test]
    fn brand_names_excluding_leaves_corpus_untouched() {
        let corpus = sample();
        let scoped = corpus.brand_names_excluding("Wallaby");
        assert_eq!(scoped, vec!["chobani"]);
        assert_eq!(corpus.brand_names(), ["wallaby", "chobani"]);
    }

    #[test]
    fn brand_names_excluding_unknown_name_is_noop() {
        let corpus = sample();
        assert_eq!(corpus.brand_names_excluding("oikos"), corpus.brand_names());
    }

    #[test]
    fn all_terms_covers_every_list() {
        let corpus = sample();
        let terms: Vec<&str> = corpus.all_terms().collect();
        assert_eq!(
            terms,
            vec!["yogurt", "probiotic", "breakfast", "wallaby", "chobani", "@chobani"]
        );
    }

    #[test]
    fn load_corpus_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("keywords.yaml");
        let corpus = load_corpus(&path).expect("shipped keywords.yaml should load");
        assert!(corpus.category_keywords().contains(&"yogurt".to_string()));
        assert!(corpus.brand_names().contains(&"greek gods".to_string()));
        assert!(corpus.brand_accounts().contains(&"@yocrunch".to_string()));
    }
}
