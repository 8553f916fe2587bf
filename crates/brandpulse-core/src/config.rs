use crate::app_config::{AppConfig, SentimentBackend};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_positive = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let value = parse_usize(var, default)?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let raw_dir = PathBuf::from(or_default("BRANDPULSE_RAW_DIR", "./data/raw"));
    let output_dir = PathBuf::from(or_default("BRANDPULSE_OUTPUT_DIR", "./data/processed"));
    let brands_path = PathBuf::from(or_default("BRANDPULSE_BRANDS_PATH", "./config/brands.yaml"));
    let keywords_path = PathBuf::from(or_default(
        "BRANDPULSE_KEYWORDS_PATH",
        "./config/keywords.yaml",
    ));
    let log_level = or_default("BRANDPULSE_LOG_LEVEL", "info");

    let relevancy_threshold = parse_usize("BRANDPULSE_RELEVANCY_THRESHOLD", "0")?;
    let sentiment_backend =
        parse_sentiment_backend(&or_default("BRANDPULSE_SENTIMENT_BACKEND", "tei"))?;
    let sentiment_url = or_default("BRANDPULSE_SENTIMENT_URL", "http://localhost:8080");
    let sentiment_batch_size = parse_positive("BRANDPULSE_SENTIMENT_BATCH_SIZE", "50")?;
    let sentiment_timeout_secs = parse_u64("BRANDPULSE_SENTIMENT_TIMEOUT_SECS", "60")?;
    let top_k = parse_positive("BRANDPULSE_TOP_K", "10")?;

    Ok(AppConfig {
        raw_dir,
        output_dir,
        brands_path,
        keywords_path,
        log_level,
        relevancy_threshold,
        sentiment_backend,
        sentiment_url,
        sentiment_batch_size,
        sentiment_timeout_secs,
        top_k,
    })
}

/// Parse a string into a `SentimentBackend` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than `tei` or `lexicon`.
fn parse_sentiment_backend(s: &str) -> Result<SentimentBackend, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "tei" => Ok(SentimentBackend::Tei),
        "lexicon" => Ok(SentimentBackend::Lexicon),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRANDPULSE_SENTIMENT_BACKEND".to_string(),
            reason: format!("unknown backend '{other}'; expected 'tei' or 'lexicon'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
