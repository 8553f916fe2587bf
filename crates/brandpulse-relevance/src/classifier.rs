//! Per-brand, per-post relevance decisions.
//!
//! A post is relevant to a brand when it (a) mentions the brand by name,
//! handle or alternate name and (b) carries some further keyword signal.
//! What counts as (b) depends on whether the brand's name is specific:
//!
//! | brand        | corroborating signal                                          |
//! |--------------|---------------------------------------------------------------|
//! | specific     | any combined keyword (category, company, competitor, adjacent) |
//! | nonspecific  | category, adjacent, competitor names (minus itself) or accounts |

use brandpulse_core::{Brand, KeywordCorpus, Post};

use crate::matching::contains_any;

/// Keyword sets for one brand, built from an immutable corpus snapshot.
#[derive(Debug, Clone)]
pub struct BrandMatcher {
    company_keywords: Vec<String>,
    corroborating_keywords: Vec<String>,
}

impl BrandMatcher {
    #[must_use]
    pub fn new(brand: &Brand, corpus: &KeywordCorpus) -> Self {
        let company_keywords = brand.company_keywords();

        let corroborating_keywords = if brand.is_nonspecific {
            let mut keywords: Vec<String> = corpus.category_keywords().to_vec();
            keywords.extend_from_slice(corpus.adjacent_keywords());
            keywords.extend(corpus.brand_names_excluding(&brand.lowercase_name()));
            keywords.extend_from_slice(corpus.brand_accounts());
            keywords
        } else {
            let mut keywords: Vec<String> = corpus.category_keywords().to_vec();
            keywords.extend(company_keywords.iter().cloned());
            keywords.extend_from_slice(corpus.brand_names());
            keywords.extend_from_slice(corpus.brand_accounts());
            keywords.extend_from_slice(corpus.adjacent_keywords());
            keywords
        };

        Self {
            company_keywords,
            corroborating_keywords,
        }
    }

    #[must_use]
    pub fn corroborating_keywords(&self) -> &[String] {
        &self.corroborating_keywords
    }

    /// The two-stage relevance test on raw post text.
    #[must_use]
    pub fn is_relevant(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        contains_any(&text, &self.company_keywords)
            && contains_any(&text, &self.corroborating_keywords)
    }
}

/// Outcome of classifying one brand against a post collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRelevance<'a> {
    pub brand_id: String,
    /// Posts that passed the keyword test.
    pub matched: Vec<&'a Post>,
    /// What survives for the brand: `matched`, or the provenance-filtered
    /// input when the threshold fallback fired.
    pub accepted: Vec<&'a Post>,
    pub below_threshold: bool,
}

impl BrandRelevance<'_> {
    #[must_use]
    pub fn relevant_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn is_relevant(&self, post_id: usize) -> bool {
        self.matched.iter().any(|p| p.id == post_id)
    }
}

/// Classify `posts` for `brand`.
///
/// If fewer than `threshold` posts match, the brand is treated as noise and
/// the accepted set becomes `posts` minus every post whose origin contains the
/// brand's snake name, ignoring case. A threshold of `0` never discards.
#[must_use]
pub fn classify_brand<'a>(
    posts: &[&'a Post],
    brand: &Brand,
    corpus: &KeywordCorpus,
    threshold: usize,
) -> BrandRelevance<'a> {
    let matcher = BrandMatcher::new(brand, corpus);

    let matched: Vec<&'a Post> = posts
        .iter()
        .copied()
        .filter(|post| matcher.is_relevant(&post.text))
        .collect();

    tracing::info!(
        brand = %brand.id,
        relevant = matched.len(),
        total = posts.len(),
        "relevant posts found"
    );

    if matched.len() >= threshold {
        return BrandRelevance {
            brand_id: brand.id.clone(),
            accepted: matched.clone(),
            matched,
            below_threshold: false,
        };
    }

    let snake_name = brand.snake_name();
    tracing::warn!(
        brand = %brand.id,
        relevant = matched.len(),
        threshold,
        origin_filter = %snake_name,
        "below relevancy threshold; discarding posts by origin"
    );

    let accepted = posts
        .iter()
        .copied()
        .filter(|post| !post.origin.to_lowercase().contains(&snake_name))
        .collect();

    BrandRelevance {
        brand_id: brand.id.clone(),
        matched,
        accepted,
        below_threshold: true,
    }
}
