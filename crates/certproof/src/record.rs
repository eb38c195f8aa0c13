//! Append-only storage for verification records.

use async_trait::async_trait;
use certproof_core::{CertProofError, Result, VerificationRecord};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Destination for verification records. Writes only; no read path.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Append one record
    async fn append(&self, record: &VerificationRecord) -> Result<()>;
}

/// JSON Lines file, one record per line, opened in append mode per write.
#[derive(Debug)]
pub struct JsonlRecordLog {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonlRecordLog {
    /// Log to `path`; the file and its parent directory are created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSink for JsonlRecordLog {
    async fn append(&self, record: &VerificationRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| record_error(&self.path, &e))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| record_error(&self.path, &e))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| record_error(&self.path, &e))?;
        file.flush()
            .await
            .map_err(|e| record_error(&self.path, &e))?;

        debug!(path = %self.path.display(), subject = %record.subject_id, "record appended");
        Ok(())
    }
}

fn record_error(path: &Path, e: &std::io::Error) -> CertProofError {
    CertProofError::Record(format!("{}: {e}", path.display()))
}

/// In-process record store
#[derive(Debug, Default)]
pub struct MemoryRecordLog {
    records: Mutex<Vec<VerificationRecord>>,
}

impl MemoryRecordLog {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record appended so far, oldest first
    pub fn records(&self) -> Vec<VerificationRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RecordSink for MemoryRecordLog {
    async fn append(&self, record: &VerificationRecord) -> Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}

/// Sink that drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecordSink;

#[async_trait]
impl RecordSink for NoopRecordSink {
    async fn append(&self, _record: &VerificationRecord) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl<T: RecordSink + ?Sized> RecordSink for Box<T> {
    async fn append(&self, record: &VerificationRecord) -> Result<()> {
        (**self).append(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certproof_core::VerificationOutcome;
    use tempfile::TempDir;

    #[tokio::test]
    async fn jsonl_log_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("verifications.jsonl");
        let log = JsonlRecordLog::new(&path);

        log.append(&VerificationRecord::now("alice", VerificationOutcome::Verified))
            .await
            .unwrap();
        log.append(&VerificationRecord::now("bob", VerificationOutcome::InvalidIssuer))
            .await
            .unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let records: Vec<VerificationRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject_id, "alice");
        assert_eq!(records[1].outcome, VerificationOutcome::InvalidIssuer);
    }

    #[tokio::test]
    async fn jsonl_log_keeps_existing_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.jsonl");
        std::fs::write(&path, "{\"existing\":true}\n").unwrap();

        JsonlRecordLog::new(&path)
            .append(&VerificationRecord::now("carol", VerificationOutcome::InvalidRecipient))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("{\"existing\":true}\n"));
    }

    #[tokio::test]
    async fn unwritable_path_is_record_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending.
        let log = JsonlRecordLog::new(dir.path());
        let err = log
            .append(&VerificationRecord::now("dave", VerificationOutcome::Verified))
            .await
            .unwrap_err();
        assert!(matches!(err, CertProofError::Record(_)));
    }

    #[test]
    fn memory_log_keeps_order() {
        let log = MemoryRecordLog::new();
        for outcome in VerificationOutcome::ALL {
            tokio_test::block_on(log.append(&VerificationRecord::now("erin", outcome))).unwrap();
        }
        let outcomes: Vec<_> = log.records().iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, VerificationOutcome::ALL);
    }
}
