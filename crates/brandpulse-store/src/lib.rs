//! Flat-file persistence for brandpulse.
//!
//! Reads the raw CSV exports into a [`brandpulse_core::Dataset`], writes the
//! per-brand and combined output tables, and computes the dataset-wide
//! quality report and summary statistics.

pub mod decode;
pub mod error;
pub mod load;
pub mod quality;
pub mod write;

pub use error::StoreError;
pub use load::{clean_text, list_csv_files, load_dataset, load_files, FILE_COLUMN, TEXT_COLUMN};
pub use quality::{
    describe, write_quality_outputs, ColumnSummary, NumericDescription, QualityReport,
    SummaryStatistics,
};
pub use write::{
    write_frequencies, write_posts, write_scored_posts, write_top_bigrams, write_top_words,
    ExtraColumn,
};
