use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required column \"{column}\"")]
    MissingColumn { path: String, column: String },

    #[error("no CSV files found in {dir}")]
    NoInputFiles { dir: String },

    #[error("column \"{column}\" has {actual} values for {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
}
