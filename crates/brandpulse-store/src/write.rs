//! CSV writers for the output tables.

use std::path::Path;

use brandpulse_core::{Dataset, Post};

use crate::error::StoreError;

/// An additional output column appended after the dataset's own columns.
#[derive(Debug, Clone)]
pub struct ExtraColumn {
    pub name: String,
    pub values: Vec<String>,
}

fn create_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    csv::Writer::from_path(path).map_err(|source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    })
}

/// Write `posts` with every dataset column plus `extra` columns.
///
/// Each extra column must hold exactly one value per post. Parent
/// directories are created as needed.
///
/// # Errors
///
/// Returns [`StoreError::ColumnLength`] on a misaligned extra column, or an
/// I/O / CSV error if the file cannot be written.
pub fn write_posts(
    path: &Path,
    dataset: &Dataset,
    posts: &[&Post],
    extra: &[ExtraColumn],
) -> Result<(), StoreError> {
    for column in extra {
        if column.values.len() != posts.len() {
            return Err(StoreError::ColumnLength {
                column: column.name.clone(),
                expected: posts.len(),
                actual: column.values.len(),
            });
        }
    }

    let csv_err = |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = create_writer(path)?;

    let header = dataset
        .columns
        .iter()
        .map(String::as_str)
        .chain(extra.iter().map(|c| c.name.as_str()));
    writer.write_record(header).map_err(csv_err)?;

    for (row_idx, post) in posts.iter().enumerate() {
        let mut row = post.output_record(dataset.text_column);
        row.extend(extra.iter().map(|c| c.values[row_idx].as_str()));
        writer.write_record(&row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = posts.len(), "wrote posts table");
    Ok(())
}

/// Write a two-column `(key, frequency)` table.
///
/// # Errors
///
/// Returns an I/O / CSV error if the file cannot be written.
pub fn write_frequencies(
    path: &Path,
    headers: [&str; 2],
    rows: &[(String, usize)],
) -> Result<(), StoreError> {
    let csv_err = |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = create_writer(path)?;
    writer.write_record(headers).map_err(csv_err)?;
    for (key, count) in rows {
        writer
            .write_record([key.as_str(), count.to_string().as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// Write a brand's scored posts: every dataset column plus
/// `sentiment_score` and `sentiment`, one `(score, label)` per post.
///
/// # Errors
///
/// Same as [`write_posts`].
pub fn write_scored_posts(
    path: &Path,
    dataset: &Dataset,
    posts: &[&Post],
    sentiments: &[(f32, &str)],
) -> Result<(), StoreError> {
    let (scores, labels): (Vec<String>, Vec<String>) = sentiments
        .iter()
        .map(|(score, label)| (score.to_string(), (*label).to_string()))
        .unzip();
    write_posts(
        path,
        dataset,
        posts,
        &[
            ExtraColumn {
                name: "sentiment_score".to_string(),
                values: scores,
            },
            ExtraColumn {
                name: "sentiment".to_string(),
                values: labels,
            },
        ],
    )
}

/// `word,frequency` table.
///
/// # Errors
///
/// Same as [`write_frequencies`].
pub fn write_top_words(path: &Path, rows: &[(String, usize)]) -> Result<(), StoreError> {
    write_frequencies(path, ["word", "frequency"], rows)
}

/// `bigram,frequency` table.
///
/// # Errors
///
/// Same as [`write_frequencies`].
pub fn write_top_bigrams(path: &Path, rows: &[(String, usize)]) -> Result<(), StoreError> {
    write_frequencies(path, ["bigram", "frequency"], rows)
}
