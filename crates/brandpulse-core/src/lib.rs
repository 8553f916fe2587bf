//! Shared domain types and configuration for brandpulse.
//!
//! Holds the brand registry, the keyword corpus, the post/dataset model, and
//! the environment-driven application config. Everything here is loaded once
//! per run and shared immutably by the pipeline crates.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod corpus;
pub mod post;

use thiserror::Error;

pub use app_config::{AppConfig, SentimentBackend};
pub use brands::{load_brands, Brand, BrandConfig, BrandRegistry, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use corpus::{load_corpus, KeywordCorpus};
pub use post::{Dataset, Post};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[source] serde_yaml::Error),

    #[error("failed to read keywords file {path}: {source}")]
    KeywordsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keywords file: {0}")]
    KeywordsFileParse(#[source] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
