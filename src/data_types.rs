// src/data_types.rs
use std::fmt;
use std::path::PathBuf;

/// Sequence number tagging every upload or connect attempt.
///
/// Ids come from one [`RequestSeq`] shared by both workflows, so a larger id
/// always means a more recent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Default)]
pub struct RequestSeq {
    last: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// A locally selected file. Only its metadata is ever looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub path: Option<PathBuf>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        UploadedFile {
            name: name.into(),
            size,
            path: None,
        }
    }

    pub fn size_megabytes(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }

    /// `name (x.xx <unit>)`
    pub fn describe(&self, megabyte_unit: &str) -> String {
        format!("{} ({:.2} {})", self.name, self.size_megabytes(), megabyte_unit)
    }
}

/// Which workflow produced the current preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(String),
    Database { database: String, table: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Rows the caption claims to show.
pub const PREVIEW_ROWS_SHOWN: usize = 5;
/// Illustrative padding added to the row count in the caption.
pub const ILLUSTRATIVE_EXTRA_ROWS: usize = 1000;

impl PreviewDataset {
    pub fn new<C, R>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<String>,
    {
        PreviewDataset {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// `(shown, total)` for the preview caption. The total is not a real count.
    pub fn caption_counts(&self) -> (usize, usize) {
        (PREVIEW_ROWS_SHOWN, self.rows.len() + ILLUSTRATIVE_EXTRA_ROWS)
    }
}

/// The dataset on screen, with the attempt that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub dataset: PreviewDataset,
    pub source: DataSource,
    pub request: RequestId,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(name) => write!(f, "file {}", name),
            DataSource::Database { database, table } if table.is_empty() => {
                write!(f, "database {}", database)
            }
            DataSource::Database { database, table } => {
                write!(f, "database {}.{}", database, table)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_increase() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(second > first);
    }

    #[test]
    fn file_size_is_shown_in_megabytes() {
        let file = UploadedFile::new("readings.csv", 3 * 1024 * 1024 / 2);
        assert_eq!(file.describe("MB"), "readings.csv (1.50 MB)");
        assert_eq!(UploadedFile::new("empty.csv", 0).describe("МБ"), "empty.csv (0.00 МБ)");
    }

    #[test]
    fn caption_adds_illustrative_rows() {
        let dataset = PreviewDataset::new(["a"], vec![vec!["1"], vec!["2"]]);
        assert_eq!(dataset.caption_counts(), (5, 1002));
    }

    #[test]
    fn data_source_display() {
        assert_eq!(DataSource::File("x.csv".into()).to_string(), "file x.csv");
        let db = DataSource::Database {
            database: "ts".into(),
            table: "sensor_data".into(),
        };
        assert_eq!(db.to_string(), "database ts.sensor_data");
    }
}
