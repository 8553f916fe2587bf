//! TEI (Text Embeddings Inference) client for sequence classification.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::classifier::TextClassifier;
use crate::error::SentimentError;
use crate::types::{Prediction, SentimentLabel};

/// Client for a TEI server hosting a three-way sentiment model.
///
/// Use [`TeiClassifier::new`] with the server root; `/predict` is appended.
pub struct TeiClassifier {
    client: Client,
    url: Url,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: Vec<[&'a str; 1]>,
    truncate: bool,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

impl TeiClassifier {
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`SentimentError::Tei`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandpulse/0.1")
            .build()?;

        let normalised = format!("{}/predict", base_url.trim_end_matches('/'));
        let url = Url::parse(&normalised)
            .map_err(|e| SentimentError::Tei(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, url })
    }

    async fn predict(&self, texts: &[&str]) -> Result<Vec<Vec<LabelScore>>, SentimentError> {
        let request = PredictRequest {
            inputs: texts.iter().map(|t| [*t]).collect(),
            truncate: true,
        };

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Tei(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SentimentError::Tei(format!("TEI response parse error: {e}")))
    }
}

/// Highest-scoring label of one input's score list.
fn top_prediction(scores: Vec<LabelScore>) -> Result<Prediction, SentimentError> {
    let best = scores
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| SentimentError::Tei("TEI returned an empty score list".to_string()))?;

    Ok(Prediction {
        label: SentimentLabel::from_label(&best.label)?,
        score: best.score,
    })
}

impl TextClassifier for TeiClassifier {
    async fn classify(&self, texts: &[&str]) -> Result<Vec<Prediction>, SentimentError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let raw = self.predict(texts).await?;
        if raw.len() != texts.len() {
            return Err(SentimentError::LengthMismatch {
                expected: texts.len(),
                actual: raw.len(),
            });
        }

        raw.into_iter().map(top_prediction).collect()
    }
}
