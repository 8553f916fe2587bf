//! Word and bigram themes for a brand's accepted posts.

pub mod frequency;
pub mod stopwords;
pub mod tokenizer;

pub use frequency::{FrequencyTable, ThemeAggregator, Themes, DEFAULT_TOP_K};
pub use stopwords::stopwords;
pub use tokenizer::Tokenizer;
