//! Offline lexicon scorer for food and brand chatter.

use crate::classifier::TextClassifier;
use crate::error::SentimentError;
use crate::types::{Prediction, SentimentLabel};

/// Raw scores within this distance of zero are labelled neutral.
const NEUTRAL_BAND: f32 = 0.05;

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("awesome", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("loving", 0.4),
    ("best", 0.5),
    ("favorite", 0.4),
    ("favourite", 0.4),
    ("recommend", 0.4),
    ("delicious", 0.5),
    ("tasty", 0.4),
    ("yummy", 0.4),
    ("yum", 0.3),
    ("creamy", 0.3),
    ("fresh", 0.3),
    ("refreshing", 0.4),
    ("healthy", 0.3),
    ("happy", 0.4),
    ("perfect", 0.5),
    ("thanks", 0.3),
    ("enjoy", 0.4),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("worst", -0.6),
    ("hate", -0.6),
    ("disgusting", -0.7),
    ("gross", -0.5),
    ("sour", -0.2),
    ("spoiled", -0.6),
    ("expired", -0.5),
    ("moldy", -0.7),
    ("recall", -0.7),
    ("recalled", -0.7),
    ("sick", -0.5),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("overpriced", -0.4),
    ("bland", -0.3),
    ("boycott", -0.6),
];

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

fn predict(text: &str) -> Prediction {
    let raw = lexicon_score(text);
    let label = if raw > NEUTRAL_BAND {
        SentimentLabel::Positive
    } else if raw < -NEUTRAL_BAND {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };
    Prediction {
        label,
        score: (1.0 + raw.abs()) / 2.0,
    }
}

/// Deterministic [`TextClassifier`] backed by [`lexicon_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl TextClassifier for LexiconClassifier {
    async fn classify(&self, texts: &[&str]) -> Result<Vec<Prediction>, SentimentError> {
        Ok(texts.iter().map(|t| predict(t)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("this yogurt is delicious");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("my cup was moldy");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "love best delicious perfect amazing awesome excellent";
        assert_eq!(lexicon_score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "disgusting moldy recall spoiled worst hate awful";
        assert_eq!(lexicon_score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        assert!(lexicon_score("delicious!!") > 0.0);
    }

    #[test]
    fn unknown_text_is_neutral_with_half_confidence() {
        let prediction = predict("just had lunch");
        assert_eq!(prediction.label, SentimentLabel::Neutral);
        assert!((prediction.score - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn label_follows_sign_and_confidence_grows_with_magnitude() {
        let mild = predict("good");
        let strong = predict("love love");
        assert_eq!(mild.label, SentimentLabel::Positive);
        assert_eq!(strong.label, SentimentLabel::Positive);
        assert!(strong.score > mild.score);
        assert!(strong.score <= 1.0);

        assert_eq!(predict("so bad").label, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn classifier_preserves_length_and_order() {
        let predictions = LexiconClassifier
            .classify(&["awful", "meh", "great"])
            .await
            .unwrap();
        let labels: Vec<SentimentLabel> = predictions.iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
                SentimentLabel::Positive
            ]
        );
    }
}
