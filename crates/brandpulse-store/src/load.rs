//! Loading raw CSV exports into a combined [`Dataset`].

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use brandpulse_core::{Dataset, Post};
use regex::Regex;

use crate::decode::decode_ignoring_invalid;
use crate::error::StoreError;

/// Column holding the post text. Required in every input file.
pub const TEXT_COLUMN: &str = "text";

/// Column holding the origin-file identifier when the export carries one.
pub const FILE_COLUMN: &str = "file";

static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://t\.\S*").expect("valid short link regex"));

/// Strip `t.co` short links from post text.
#[must_use]
pub fn clean_text(text: &str) -> String {
    SHORT_LINK.replace_all(text, "").into_owned()
}

/// List every `*.csv` file directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the directory cannot be read.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let io_err = |source| StoreError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and combine every CSV file in `dir`.
///
/// # Errors
///
/// Returns [`StoreError::NoInputFiles`] when the directory holds no CSV files,
/// otherwise any error from [`load_files`].
pub fn load_dataset(dir: &Path) -> Result<Dataset, StoreError> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(StoreError::NoInputFiles {
            dir: dir.display().to_string(),
        });
    }
    load_files(&files)
}

struct RawTable {
    source_name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Load and combine the given CSV files.
///
/// The column list is the ordered union of every file's headers; rows from
/// files lacking a column get an empty cell. Post text is cleaned with
/// [`clean_text`].
///
/// # Errors
///
/// Returns [`StoreError::MissingColumn`] if any file lacks a `text` column,
/// or an I/O / CSV error for unreadable files.
pub fn load_files(paths: &[PathBuf]) -> Result<Dataset, StoreError> {
    let tables = paths
        .iter()
        .map(|p| read_table(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut columns: Vec<String> = Vec::new();
    let mut mappings: Vec<Vec<usize>> = Vec::with_capacity(tables.len());
    for table in &tables {
        let mapping = table
            .headers
            .iter()
            .map(|header| {
                columns.iter().position(|c| c == header).unwrap_or_else(|| {
                    columns.push(header.clone());
                    columns.len() - 1
                })
            })
            .collect();
        mappings.push(mapping);
    }

    let Some(text_column) = columns.iter().position(|c| c == TEXT_COLUMN) else {
        // Only reachable with zero input files.
        return Ok(Dataset::default());
    };
    let file_column = columns.iter().position(|c| c == FILE_COLUMN);

    let mut posts = Vec::new();
    for (table, mapping) in tables.into_iter().zip(mappings) {
        for row in table.rows {
            let mut record = vec![String::new(); columns.len()];
            for (value, &target) in row.into_iter().zip(&mapping) {
                record[target] = value;
            }

            let origin = file_column
                .map(|idx| record[idx].trim())
                .filter(|v| !v.is_empty())
                .map_or_else(|| table.source_name.clone(), ToString::to_string);

            posts.push(Post {
                id: posts.len(),
                text: clean_text(&record[text_column]),
                origin,
                record,
            });
        }
    }

    tracing::info!(
        files = paths.len(),
        rows = posts.len(),
        columns = columns.len(),
        "loaded raw dataset"
    );

    Ok(Dataset {
        columns,
        text_column,
        posts,
    })
}

fn read_table(path: &Path) -> Result<RawTable, StoreError> {
    let display = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: display.clone(),
        source,
    })?;
    let content = decode_ignoring_invalid(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| StoreError::Csv {
            path: display.clone(),
            source,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if !headers.iter().any(|h| h == TEXT_COLUMN) {
        return Err(StoreError::MissingColumn {
            path: display,
            column: TEXT_COLUMN.to_string(),
        });
    }

    let mut rows = Vec::new();
    let mut reshaped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| StoreError::Csv {
            path: display.clone(),
            source,
        })?;
        let mut row: Vec<String> = record.iter().map(ToString::to_string).collect();
        if row.len() != headers.len() {
            reshaped += 1;
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    if reshaped > 0 {
        let path_display = display.as_str();
        tracing::warn!(
            path = %path_display,
            rows = reshaped,
            "rows with unexpected field counts were padded or truncated"
        );
    }

    let source_name = path
        .file_name()
        .map_or_else(|| display.clone(), |n| n.to_string_lossy().into_owned());

    Ok(RawTable {
        source_name,
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_short_links() {
        assert_eq!(
            clean_text("love @chobani https://t.co/abc123 so much"),
            "love @chobani  so much"
        );
    }

    #[test]
    fn clean_text_keeps_other_urls() {
        assert_eq!(
            clean_text("see https://chobani.com"),
            "see https://chobani.com"
        );
    }

    #[test]
    fn list_csv_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "text\n").unwrap();
        std::fs::write(dir.path().join("a.CSV"), "text\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }
}
