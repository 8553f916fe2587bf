//! Rule-based brand relevance filtering.
//!
//! For every brand the raw posts first pass the brand's negative-keyword
//! filter ([`remove_negative_keyword_posts`]) and are then classified by the
//! two-stage keyword test in [`classify_brand`]. Each brand is evaluated
//! independently against the same input; nothing a brand does is visible to
//! the next one.

pub mod classifier;
pub mod negative;

mod matching;

use brandpulse_core::{Brand, BrandRegistry, KeywordCorpus, Post};

pub use classifier::{classify_brand, BrandMatcher, BrandRelevance};
pub use negative::remove_negative_keyword_posts;

/// Negative-keyword filter followed by relevance classification for one brand.
#[must_use]
pub fn evaluate_brand<'a>(
    posts: &[&'a Post],
    brand: &Brand,
    corpus: &KeywordCorpus,
    threshold: usize,
) -> BrandRelevance<'a> {
    let candidates = remove_negative_keyword_posts(posts, brand);
    if candidates.len() != posts.len() {
        tracing::debug!(
            brand = %brand.id,
            removed = posts.len() - candidates.len(),
            "removed posts matching negative keywords"
        );
    }
    classify_brand(&candidates, brand, corpus, threshold)
}

/// [`evaluate_brand`] for every brand in the registry, in registry order.
#[must_use]
pub fn evaluate_all<'a>(
    posts: &[&'a Post],
    registry: &BrandRegistry,
    corpus: &KeywordCorpus,
    threshold: usize,
) -> Vec<BrandRelevance<'a>> {
    registry
        .iter()
        .map(|brand| evaluate_brand(posts, brand, corpus, threshold))
        .collect()
}
