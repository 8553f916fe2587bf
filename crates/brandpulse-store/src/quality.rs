//! Dataset-wide quality report and summary statistics.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use brandpulse_core::Dataset;
use chrono::Utc;

use crate::error::StoreError;

const RETWEETED_COLUMN: &str = "retweeted";
const RETWEET_COUNT_COLUMN: &str = "retweet_count";
const TOP_RETWEETED_ROWS: usize = 5;

/// Verbose per-user/geo/time columns left out of the top-retweeted sample.
const SAMPLE_EXCLUDED_COLUMNS: &[&str] = &[
    "lang",
    "created_at",
    "created_day",
    "timeonly",
    "created_dateonly",
    "datetime",
    "coordinates",
    "geo",
    "place",
    "truncated",
    "user_favourites_count",
    "user_following",
    "user_friends_count",
    "user_geo_enabled",
    "user_listed_count",
    "user_location",
    "user_statuses_count",
    "user_time_zone",
    "file",
];

fn is_null(value: &str) -> bool {
    value.trim().is_empty()
}

fn duplicate_rows(dataset: &Dataset) -> usize {
    let mut seen: HashSet<Vec<&str>> = HashSet::with_capacity(dataset.len());
    dataset
        .posts
        .iter()
        .filter(|post| !seen.insert(post.output_record(dataset.text_column)))
        .count()
}

/// Headline metrics written to `statistics.csv`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub total_rows: usize,
    pub null_cells: usize,
    pub duplicate_rows: usize,
    /// Share of rows whose `retweeted` column is `TRUE`, rounded to 2 decimals.
    pub retweet_percentage: f64,
}

impl SummaryStatistics {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let null_cells = dataset
            .posts
            .iter()
            .flat_map(|p| p.record.iter())
            .filter(|v| is_null(v))
            .count();

        let retweeted = dataset.column_index(RETWEETED_COLUMN).map_or(0, |idx| {
            dataset
                .posts
                .iter()
                .filter(|p| p.record[idx].trim().eq_ignore_ascii_case("true"))
                .count()
        });

        Self {
            total_rows: dataset.len(),
            null_cells,
            duplicate_rows: duplicate_rows(dataset),
            retweet_percentage: percentage(retweeted, dataset.len()),
        }
    }

    /// `(metric, count)` rows in report order.
    #[must_use]
    pub fn to_rows(&self) -> Vec<(String, String)> {
        vec![
            ("total number of rows".to_string(), self.total_rows.to_string()),
            ("number of null rows".to_string(), self.null_cells.to_string()),
            (
                "number of duplicate rows".to_string(),
                self.duplicate_rows.to_string(),
            ),
            (
                "percentage that are retweets".to_string(),
                format!("{:.2}", self.retweet_percentage),
            ),
        ]
    }
}

/// `part / whole` as a percentage rounded to 2 decimals; `0.0` for an empty whole.
#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Null count for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub null_count: usize,
}

/// The human-readable data-quality report (`data_quality.txt`).
#[derive(Debug, Clone)]
pub struct QualityReport {
    pub columns: Vec<ColumnSummary>,
    pub row_count: usize,
    pub duplicate_rows: usize,
    /// Header and rows of the top posts by `retweet_count`.
    pub top_retweeted: (Vec<String>, Vec<Vec<String>>),
}

impl QualityReport {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let columns = dataset
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| ColumnSummary {
                name: name.clone(),
                null_count: dataset
                    .posts
                    .iter()
                    .filter(|p| is_null(&p.record[idx]))
                    .count(),
            })
            .collect();

        Self {
            columns,
            row_count: dataset.len(),
            duplicate_rows: duplicate_rows(dataset),
            top_retweeted: top_retweeted(dataset),
        }
    }

    /// Render the report as plain text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Generated at: {}\n", Utc::now().to_rfc3339());

        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let _ = writeln!(out, "Column names:\n{}\n", names.join(", "));
        let _ = writeln!(out, "Number of rows:\n{}\n", self.row_count);

        let _ = writeln!(out, "Number of null rows:");
        for column in &self.columns {
            let _ = writeln!(out, "{}: {}", column.name, column.null_count);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Number of duplicate rows:\n{}\n", self.duplicate_rows);

        let (header, rows) = &self.top_retweeted;
        let _ = writeln!(out, "highest retweet count entries:");
        if rows.is_empty() {
            let _ = writeln!(out, "(no rows with a numeric {RETWEET_COUNT_COLUMN})");
        } else {
            let _ = writeln!(out, "{}", header.join(" | "));
            for row in rows {
                let _ = writeln!(out, "{}", row.join(" | "));
            }
        }
        out
    }
}

fn top_retweeted(dataset: &Dataset) -> (Vec<String>, Vec<Vec<String>>) {
    let kept: Vec<usize> = (0..dataset.columns.len())
        .filter(|&idx| !SAMPLE_EXCLUDED_COLUMNS.contains(&dataset.columns[idx].as_str()))
        .collect();
    let header = kept.iter().map(|&idx| dataset.columns[idx].clone()).collect();

    let Some(count_idx) = dataset.column_index(RETWEET_COUNT_COLUMN) else {
        return (header, Vec::new());
    };

    let mut ranked: Vec<(f64, usize)> = dataset
        .posts
        .iter()
        .enumerate()
        .filter_map(|(pos, p)| {
            p.record[count_idx]
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| (v, pos))
        })
        .collect();
    // Stable: equal counts keep dataset order.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let rows = ranked
        .into_iter()
        .take(TOP_RETWEETED_ROWS)
        .map(|(_, pos)| {
            let post = &dataset.posts[pos];
            let record = post.output_record(dataset.text_column);
            kept.iter().map(|&idx| record[idx].to_string()).collect()
        })
        .collect();

    (header, rows)
}

/// Descriptive statistics for one numeric column (pandas `describe` shape).
#[derive(Debug, Clone, PartialEq)]
pub struct NumericDescription {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Describe every column whose non-empty cells all parse as numbers.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn describe(dataset: &Dataset) -> Vec<NumericDescription> {
    let mut out = Vec::new();
    for (idx, name) in dataset.columns.iter().enumerate() {
        if idx == dataset.text_column {
            continue;
        }
        let cells: Vec<&str> = dataset
            .posts
            .iter()
            .map(|p| p.record[idx].trim())
            .filter(|v| !v.is_empty())
            .collect();
        if cells.is_empty() {
            continue;
        }
        let Ok(mut values) = cells
            .iter()
            .map(|v| v.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
        else {
            continue;
        };
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            var.sqrt()
        });

        out.push(NumericDescription {
            column: name.clone(),
            count,
            mean,
            std,
            min: values[0],
            q25: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: values[count - 1],
        });
    }
    out
}

/// Linear-interpolated quantile over sorted, non-empty `values`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile(values: &[f64], q: f64) -> f64 {
    let pos = q * (values.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * frac
}

fn write_describe(path: &Path, descriptions: &[NumericDescription]) -> Result<(), StoreError> {
    let csv_err = |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    let header = std::iter::once("").chain(descriptions.iter().map(|d| d.column.as_str()));
    writer.write_record(header).map_err(csv_err)?;

    let stat_rows: [(&str, fn(&NumericDescription) -> String); 8] = [
        ("count", |d| d.count.to_string()),
        ("mean", |d| d.mean.to_string()),
        ("std", |d| d.std.map(|s| s.to_string()).unwrap_or_default()),
        ("min", |d| d.min.to_string()),
        ("25%", |d| d.q25.to_string()),
        ("50%", |d| d.median.to_string()),
        ("75%", |d| d.q75.to_string()),
        ("max", |d| d.max.to_string()),
    ];
    for (label, field) in stat_rows {
        let row = std::iter::once(label.to_string()).chain(descriptions.iter().map(field));
        writer.write_record(row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Write `data_quality.txt`, `data_describe.csv` and `statistics.csv` into `dir`.
///
/// # Errors
///
/// Returns an I/O / CSV error if any file cannot be written.
pub fn write_quality_outputs(dir: &Path, dataset: &Dataset) -> Result<SummaryStatistics, StoreError> {
    std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let report_path = dir.join("data_quality.txt");
    let report = QualityReport::from_dataset(dataset);
    std::fs::write(&report_path, report.render()).map_err(|source| StoreError::Io {
        path: report_path.display().to_string(),
        source,
    })?;

    write_describe(&dir.join("data_describe.csv"), &describe(dataset))?;

    let statistics = SummaryStatistics::from_dataset(dataset);
    let rows: Vec<(String, String)> = statistics.to_rows();
    write_metric_rows(&dir.join("statistics.csv"), &rows)?;

    tracing::info!(
        rows = statistics.total_rows,
        duplicates = statistics.duplicate_rows,
        retweet_percentage = statistics.retweet_percentage,
        "wrote quality outputs"
    );
    Ok(statistics)
}

fn write_metric_rows(path: &Path, rows: &[(String, String)]) -> Result<(), StoreError> {
    let csv_err = |source| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(["metric", "count"]).map_err(csv_err)?;
    for (metric, count) in rows {
        writer
            .write_record([metric.as_str(), count.as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use brandpulse_core::Post;

    use super::*;

    fn dataset(rows: &[[&str; 3]]) -> Dataset {
        Dataset {
            columns: vec!["text".into(), "retweeted".into(), "retweet_count".into()],
            text_column: 0,
            posts: rows
                .iter()
                .enumerate()
                .map(|(id, row)| Post {
                    id,
                    text: row[0].to_string(),
                    origin: "f.csv".into(),
                    record: row.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_dataset_statistics_are_zero() {
        let stats = SummaryStatistics::from_dataset(&dataset(&[]));
        assert_eq!(stats.total_rows, 0);
        assert_eq!(stats.null_cells, 0);
        assert_eq!(stats.duplicate_rows, 0);
        assert!(stats.retweet_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn retweet_percentage_rounded() {
        let ds = dataset(&[
            ["a", "TRUE", "1"],
            ["b", "FALSE", "2"],
            ["c", "false", "3"],
        ]);
        let stats = SummaryStatistics::from_dataset(&ds);
        assert!((stats.retweet_percentage - 33.33).abs() < 1e-9);
    }

    #[test]
    fn retweet_percentage_without_column_is_zero() {
        let mut ds = dataset(&[["a", "TRUE", "1"]]);
        ds.columns[1] = "other".into();
        assert!(SummaryStatistics::from_dataset(&ds).retweet_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn nulls_and_duplicates_counted() {
        let ds = dataset(&[["a", "", "1"], ["a", "", "1"], ["b", "TRUE", ""]]);
        let stats = SummaryStatistics::from_dataset(&ds);
        assert_eq!(stats.null_cells, 3);
        assert_eq!(stats.duplicate_rows, 1);

        let report = QualityReport::from_dataset(&ds);
        assert_eq!(report.columns[1].null_count, 2);
        assert_eq!(report.columns[2].null_count, 1);
    }

    #[test]
    fn statistics_rows_format_percentage() {
        let stats = SummaryStatistics::from_dataset(&dataset(&[]));
        let rows = stats.to_rows();
        assert_eq!(rows[3].1, "0.00");
    }

    #[test]
    fn top_retweeted_sorted_descending_and_skips_non_numeric() {
        let ds = dataset(&[
            ["low", "FALSE", "1"],
            ["high", "FALSE", "40"],
            ["junk", "FALSE", "n/a"],
            ["mid", "FALSE", "7"],
        ]);
        let (header, rows) = top_retweeted(&ds);
        assert_eq!(header, vec!["text", "retweeted", "retweet_count"]);
        let texts: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(texts, vec!["high", "mid", "low"]);
    }

    #[test]
    fn describe_numeric_columns_only() {
        let ds = dataset(&[
            ["a", "TRUE", "1"],
            ["b", "FALSE", "2"],
            ["c", "FALSE", "3"],
            ["d", "FALSE", "4"],
        ]);
        let described = describe(&ds);
        assert_eq!(described.len(), 1);
        let d = &described[0];
        assert_eq!(d.column, "retweet_count");
        assert_eq!(d.count, 4);
        assert!((d.mean - 2.5).abs() < 1e-9);
        assert!((d.q25 - 1.75).abs() < 1e-9);
        assert!((d.median - 2.5).abs() < 1e-9);
        assert!((d.max - 4.0).abs() < 1e-9);
        assert!(d.std.is_some());
    }

    #[test]
    fn render_lists_columns_and_counts() {
        let ds = dataset(&[["a", "TRUE", "3"]]);
        let text = QualityReport::from_dataset(&ds).render();
        assert!(text.contains("Column names:\ntext, retweeted, retweet_count"));
        assert!(text.contains("Number of rows:\n1"));
        assert!(text.contains("highest retweet count entries:"));
    }
}
