//! The classifier seam the scoring pipeline is generic over.

use std::future::Future;

use brandpulse_core::{AppConfig, SentimentBackend};

use crate::error::SentimentError;
use crate::lexicon::LexiconClassifier;
use crate::tei::TeiClassifier;
use crate::types::Prediction;

/// A batch text classifier.
///
/// Implementations return exactly one [`Prediction`] per input, in input
/// order. Callers verify the length; a mismatch is treated as a failure.
pub trait TextClassifier {
    fn classify(
        &self,
        texts: &[&str],
    ) -> impl Future<Output = Result<Vec<Prediction>, SentimentError>> + Send;
}

/// Backend selected at runtime from configuration.
pub enum Classifier {
    Tei(TeiClassifier),
    Lexicon(LexiconClassifier),
}

impl Classifier {
    /// Build the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the HTTP client or base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, SentimentError> {
        match config.sentiment_backend {
            SentimentBackend::Tei => Ok(Self::Tei(TeiClassifier::new(
                &config.sentiment_url,
                config.sentiment_timeout_secs,
            )?)),
            SentimentBackend::Lexicon => Ok(Self::Lexicon(LexiconClassifier)),
        }
    }
}

impl TextClassifier for Classifier {
    async fn classify(&self, texts: &[&str]) -> Result<Vec<Prediction>, SentimentError> {
        match self {
            Self::Tei(tei) => tei.classify(texts).await,
            Self::Lexicon(lexicon) => lexicon.classify(texts).await,
        }
    }
}
