use std::fmt;

use crate::error::SentimentError;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }

    /// Parse a model label.
    ///
    /// Accepts `negative`, `neutral`, `positive` in any case, and the
    /// `LABEL_0`..`LABEL_2` names emitted by heads exported without an
    /// `id2label` mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::UnknownLabel`] for anything else.
    pub fn from_label(label: &str) -> Result<Self, SentimentError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "negative" | "label_0" => Ok(Self::Negative),
            "neutral" | "label_1" => Ok(Self::Neutral),
            "positive" | "label_2" => Ok(Self::Positive),
            _ => Err(SentimentError::UnknownLabel(label.to_string())),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classifier output: the winning label and its confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: SentimentLabel,
    pub score: f32,
}

/// A prediction attached to a post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentRecord {
    pub post_id: usize,
    pub score: f32,
    pub label: SentimentLabel,
}
