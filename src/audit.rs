//! Append-only audit log.
//!
//! Every store-backed operation leaves one human-readable, timestamp-prefixed
//! line here. Writes are fire-and-forget: the destination must open at
//! startup, but failures after that are logged and dropped, never surfaced
//! to the request that triggered them.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::warn;

/// Errors that can occur while opening the audit destination.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to open audit log at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to the audit writer task, shared across request handlers.
///
/// Cheap to clone; all clones feed the same writer.
#[derive(Debug, Clone)]
pub struct AuditLog {
    tx: mpsc::UnboundedSender<String>,
}

impl AuditLog {
    /// Open the destination in append mode and spawn the writer task.
    ///
    /// The writer drains queued lines until every handle is dropped. Write
    /// failures are logged at `warn` and otherwise ignored.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| AuditError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let log_path = path.to_path_buf();
        tokio::spawn(async move {
            while let Some(line) = rx.recv().await {
                if let Err(e) = file.write_all(line.as_bytes()).await {
                    warn!(path = %log_path.display(), error = %e, "Failed to write audit line");
                }
            }
        });

        Ok(Self { tx })
    }

    /// Queue one timestamp-prefixed line.
    ///
    /// Infallible from the caller's point of view; if the writer is gone the
    /// line is silently dropped.
    pub fn record(&self, message: impl AsRef<str>) {
        let line = format!(
            "{} {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            message.as_ref()
        );
        let _ = self.tx.send(line);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;

    /// Wait until the writer task has flushed the expected lines.
    async fn wait_for_content(path: &Path, lines: usize) -> String {
        for _ in 0..100 {
            if let Ok(content) = tokio::fs::read_to_string(path).await
                && content.lines().count() >= lines
            {
                return content;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("audit log never reached {lines} lines");
    }

    #[tokio::test]
    async fn open_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-such-dir").join("student.log");

        let result = AuditLog::open(&path).await;

        assert!(matches!(result, Err(AuditError::Open { .. })));
    }

    #[tokio::test]
    async fn record_appends_timestamped_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("student.log");

        let audit = AuditLog::open(&path).await.unwrap();
        audit.record("created student abc");
        audit.record("soft-deleted student abc");

        let content = wait_for_content(&path, 2).await;
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].ends_with("created student abc"));
        assert!(lines[1].ends_with("soft-deleted student abc"));
        // Timestamp prefix parses as RFC 3339.
        let (stamp, _) = lines[0].split_once(' ').unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[tokio::test]
    async fn reopen_appends_rather_than_truncates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("student.log");

        let first = AuditLog::open(&path).await.unwrap();
        first.record("first run");
        wait_for_content(&path, 1).await;
        drop(first);

        let second = AuditLog::open(&path).await.unwrap();
        second.record("second run");

        let content = wait_for_content(&path, 2).await;
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
    }
}
