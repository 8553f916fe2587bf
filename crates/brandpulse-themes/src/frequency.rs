//! Unigram and bigram frequency tables.

use std::collections::{HashMap, HashSet};

use brandpulse_core::KeywordCorpus;

use crate::stopwords::stopwords;
use crate::tokenizer::Tokenizer;

pub const DEFAULT_TOP_K: usize = 10;

/// Term counts that remember the order terms were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn add(&mut self, term: String) {
        if let Some(&slot) = self.index.get(&term) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(term.clone(), self.counts.len());
            self.counts.push((term, 1));
        }
    }

    #[must_use]
    pub fn count(&self, term: &str) -> usize {
        self.index.get(term).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `k` most frequent terms, ties in first-seen order.
    #[must_use]
    pub fn top(&self, k: usize) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        // Stable sort keeps insertion order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}

/// Word and bigram counts for one brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Themes {
    pub words: FrequencyTable,
    pub bigrams: FrequencyTable,
}

impl Themes {
    #[must_use]
    pub fn top_words(&self, k: usize) -> Vec<(String, usize)> {
        self.words.top(k)
    }

    /// Bigrams rendered as `"first second"`.
    #[must_use]
    pub fn top_bigrams(&self, k: usize) -> Vec<(String, usize)> {
        self.bigrams.top(k)
    }
}

/// Tokenizes posts and counts the terms that carry a theme.
///
/// Drops stopwords, punctuation and every keyword-corpus entry, since the
/// brand and category names would otherwise dominate every table.
#[derive(Debug, Clone)]
pub struct ThemeAggregator {
    tokenizer: Tokenizer,
    excluded: HashSet<String>,
}

impl ThemeAggregator {
    #[must_use]
    pub fn new(corpus: &KeywordCorpus) -> Self {
        let mut excluded = stopwords();
        excluded.extend(corpus.all_terms().map(ToString::to_string));
        Self {
            tokenizer: Tokenizer::new(),
            excluded,
        }
    }

    /// Lowercased, filtered tokens of one post.
    #[must_use]
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| token.to_lowercase())
            .filter(|token| !self.excluded.contains(token))
            .collect()
    }

    /// Count unigrams and per-post bigrams across `texts`.
    ///
    /// Bigrams are formed within a single post only.
    pub fn aggregate<'t, I>(&self, texts: I) -> Themes
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut themes = Themes::default();
        let mut posts = 0_usize;

        for text in texts {
            posts += 1;
            let terms = self.terms(text);
            for pair in terms.windows(2) {
                themes.bigrams.add(format!("{} {}", pair[0], pair[1]));
            }
            for term in terms {
                themes.words.add(term);
            }
        }

        tracing::debug!(
            posts,
            words = themes.words.len(),
            bigrams = themes.bigrams.len(),
            "aggregated themes"
        );
        themes
    }
}
