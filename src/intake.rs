// src/intake.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::data_types::{PreviewDataset, UploadedFile};
use crate::samples::DAILY_SERIES;

/// Extensions offered in the file dialog.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];
/// Advertised upload limit. Shown to the user, never checked.
pub const ADVERTISED_MAX_MEGABYTES: u64 = 100;

/// Opens the native file dialog and resolves the chosen file's metadata.
/// Returns `None` when the user cancels or the file cannot be inspected.
pub async fn pick_file() -> Option<UploadedFile> {
    let handle = rfd::AsyncFileDialog::new()
        .add_filter("CSV, Excel", &ACCEPTED_EXTENSIONS)
        .pick_file()
        .await?;
    let path = handle.path().to_path_buf();

    match inspect(&path).await {
        Ok(file) => Some(file),
        Err(err) => {
            log::warn!("Could not read metadata of {}: {}", path.display(), err);
            None
        }
    }
}

/// Builds an [`UploadedFile`] from file-system metadata. Content is not read.
pub async fn inspect(path: &Path) -> std::io::Result<UploadedFile> {
    let metadata = tokio::fs::metadata(path).await?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(UploadedFile {
        name,
        size: metadata.len(),
        path: Some(PathBuf::from(path)),
    })
}

/// Turns an uploaded file into a preview dataset.
pub trait DatasetParser: Send + Sync {
    fn parse_dataset(&self, file: UploadedFile) -> BoxFuture<'static, PreviewDataset>;
}

/// Stands in for a real CSV/Excel reader: waits, then returns the daily
/// sample no matter what the file holds.
#[derive(Debug, Clone)]
pub struct SimulatedParser {
    latency: Duration,
}

impl SimulatedParser {
    pub fn new(latency: Duration) -> Self {
        SimulatedParser { latency }
    }
}

impl DatasetParser for SimulatedParser {
    fn parse_dataset(&self, file: UploadedFile) -> BoxFuture<'static, PreviewDataset> {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            log::debug!("Simulated parse of {} ({:?}) finished", file.name, file.path);
            DAILY_SERIES.clone()
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn inspect_reads_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not,really,parsed\n").unwrap();

        let uploaded = inspect(&path).await.unwrap();
        assert_eq!(uploaded.name, "series.csv");
        assert_eq!(uploaded.size, 18);
        assert_eq!(uploaded.path.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn inspect_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(inspect(&dir.path().join("absent.xlsx")).await.is_err());
    }

    #[tokio::test]
    async fn parser_ignores_content() {
        let parser = SimulatedParser::new(Duration::ZERO);
        let small = parser.parse_dataset(UploadedFile::new("a.csv", 1)).await;
        let large = parser.parse_dataset(UploadedFile::new("b.xlsx", 500 * 1024 * 1024)).await;
        assert_eq!(small, *DAILY_SERIES);
        assert_eq!(large, *DAILY_SERIES);
    }

    #[tokio::test(start_paused = true)]
    async fn parser_waits_for_latency() {
        let parser = SimulatedParser::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();
        parser.parse_dataset(UploadedFile::new("a.csv", 1)).await;
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
