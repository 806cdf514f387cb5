//! Newline-delimited text records backing the random card endpoint.
//!
//! The file is read once, on first use, and kept for the life of the process.
//! One record per line; a literal `\n` inside a line stands for a hard line break.

use std::path::PathBuf;

use anyhow::Context;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::errors::AppError;

#[derive(Debug, Default)]
pub struct RecordCache {
    path: Option<PathBuf>,
    records: OnceCell<Vec<String>>,
}

impl RecordCache {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            records: OnceCell::new(),
        }
    }

    /// All records, loading the file on first call.
    pub async fn records(&self) -> Result<&[String], AppError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| AppError::NotFound("no record file is configured".to_string()))?;
        let records = self
            .records
            .get_or_try_init(|| load_records(path.clone()))
            .await?;
        Ok(records.as_slice())
    }

    /// Record at `seed` modulo the record count.
    pub async fn pick(&self, seed: u128) -> Result<String, AppError> {
        let records = self.records().await?;
        if records.is_empty() {
            return Err(AppError::NotFound("the record file is empty".to_string()));
        }
        let index = (seed % records.len() as u128) as usize;
        Ok(records[index].clone())
    }
}

async fn load_records(path: PathBuf) -> Result<Vec<String>, AppError> {
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    let records = parse_records(&raw);
    if records.is_empty() {
        warn!("Record file {} has no usable lines", path.display());
    } else {
        info!("Loaded {} records from {}", records.len(), path.display());
    }
    Ok(records)
}

pub fn parse_records(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.replace("\\n", "\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_records() {
        let raw = "First review\r\n\n   \nLine one\\nLine two\n";
        assert_eq!(
            parse_records(raw),
            vec!["First review".to_string(), "Line one\nLine two".to_string()]
        );
    }

    #[tokio::test]
    async fn test_pick_wraps_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file, "beta").unwrap();
        writeln!(file, "gamma").unwrap();

        let cache = RecordCache::new(Some(file.path().to_path_buf()));
        assert_eq!(cache.pick(0).await.unwrap(), "alpha");
        assert_eq!(cache.pick(4).await.unwrap(), "beta");
        assert_eq!(cache.records().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_path_is_not_found() {
        let cache = RecordCache::new(None);
        assert!(matches!(cache.pick(1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_file_is_not_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let cache = RecordCache::new(Some(file.path().to_path_buf()));
        assert!(matches!(cache.pick(0).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_internal() {
        let cache = RecordCache::new(Some(PathBuf::from("/nonexistent/records.txt")));
        assert!(matches!(cache.pick(0).await, Err(AppError::Internal(_))));
    }
}
