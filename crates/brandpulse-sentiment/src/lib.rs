//! Post sentiment scoring.
//!
//! Texts are sent to a [`TextClassifier`] in fixed-size batches and each
//! prediction is attached back to its post by position. Two backends ship:
//! [`TeiClassifier`] for a text-classification model served over HTTP and
//! [`LexiconClassifier`], a deterministic offline scorer.

pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod tei;
pub mod types;

pub use classifier::{Classifier, TextClassifier};
pub use error::SentimentError;
pub use lexicon::{lexicon_score, LexiconClassifier};
pub use pipeline::{score_posts, score_texts};
pub use tei::TeiClassifier;
pub use types::{Prediction, SentimentLabel, SentimentRecord};
