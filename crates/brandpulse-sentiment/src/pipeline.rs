//! Batched scoring of a brand's accepted posts.

use brandpulse_core::Post;

use crate::classifier::TextClassifier;
use crate::error::SentimentError;
use crate::types::{Prediction, SentimentRecord};

/// Classify `texts` in consecutive batches of at most `batch_size`.
///
/// One classifier call per batch; predictions are concatenated in input
/// order. An empty input never reaches the classifier.
///
/// # Errors
///
/// Returns [`SentimentError::InvalidBatchSize`] for a zero batch size,
/// [`SentimentError::LengthMismatch`] if any batch comes back with the wrong
/// number of predictions, and propagates classifier errors unchanged. No
/// partial result is returned.
pub async fn score_texts<C: TextClassifier>(
    classifier: &C,
    texts: &[&str],
    batch_size: usize,
) -> Result<Vec<Prediction>, SentimentError> {
    if batch_size == 0 {
        return Err(SentimentError::InvalidBatchSize);
    }

    let mut predictions = Vec::with_capacity(texts.len());
    let batches = texts.len().div_ceil(batch_size);

    for (index, batch) in texts.chunks(batch_size).enumerate() {
        let scored = classifier.classify(batch).await?;
        if scored.len() != batch.len() {
            return Err(SentimentError::LengthMismatch {
                expected: batch.len(),
                actual: scored.len(),
            });
        }
        tracing::debug!(batch = index + 1, batches, size = batch.len(), "scored batch");
        predictions.extend(scored);
    }

    Ok(predictions)
}

/// Score posts and attach each prediction to its post id.
///
/// # Errors
///
/// See [`score_texts`].
pub async fn score_posts<C: TextClassifier>(
    classifier: &C,
    posts: &[&Post],
    batch_size: usize,
) -> Result<Vec<SentimentRecord>, SentimentError> {
    let texts: Vec<&str> = posts.iter().map(|p| p.text.as_str()).collect();
    let predictions = score_texts(classifier, &texts, batch_size).await?;

    Ok(posts
        .iter()
        .zip(predictions)
        .map(|(post, prediction)| SentimentRecord {
            post_id: post.id,
            score: prediction.score,
            label: prediction.label,
        })
        .collect())
}
