use std::path::PathBuf;

/// Which text-classification backend scores sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBackend {
    /// Remote TEI `/predict` endpoint serving the pretrained model.
    Tei,
    /// Offline lexicon scorer.
    Lexicon,
}

impl std::fmt::Display for SentimentBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBackend::Tei => write!(f, "tei"),
            SentimentBackend::Lexicon => write!(f, "lexicon"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub raw_dir: PathBuf,
    pub output_dir: PathBuf,
    pub brands_path: PathBuf,
    pub keywords_path: PathBuf,
    pub log_level: String,
    pub relevancy_threshold: usize,
    pub sentiment_backend: SentimentBackend,
    pub sentiment_url: String,
    pub sentiment_batch_size: usize,
    pub sentiment_timeout_secs: u64,
    pub top_k: usize,
}

impl AppConfig {
    /// Brand-scoped output directory, `<output_dir>/companies/<snake_name>`.
    #[must_use]
    pub fn brand_dir(&self, snake_name: &str) -> PathBuf {
        self.output_dir.join("companies").join(snake_name)
    }
}
