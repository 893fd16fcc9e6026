//! Activity log
//!
//! Records every completed submit/retrieve as one JSON line. The form shows
//! generic error text; the underlying cause is kept here.

use crate::error::Operation;
use alloy::primitives::TxHash;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Entry in the activity log
#[derive(Debug, Serialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub status: &'static str,
    pub tx_hash: Option<String>,
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl ActivityEntry {
    pub fn success(operation: Operation, tx_hash: Option<TxHash>, duration_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            status: "success",
            tx_hash: tx_hash.map(|h| h.to_string()),
            error: None,
            duration_ms,
        }
    }

    pub fn failed(operation: Operation, cause: &crate::Error, duration_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            status: "failed",
            tx_hash: None,
            error: Some(cause.to_string()),
            duration_ms,
        }
    }
}

/// Writer for activity log entries
struct ActivityLogWriter {
    path: PathBuf,
}

impl ActivityLogWriter {
    fn write(&self, entry: &ActivityEntry) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
        Ok(())
    }
}

/// Append-only JSONL log shared between handlers
#[derive(Clone)]
pub struct ActivityLog {
    writer: Arc<Mutex<ActivityLogWriter>>,
}

impl ActivityLog {
    /// # Arguments
    /// * `log_path` - Path to the log file, created on first write
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(ActivityLogWriter {
                path: log_path.into(),
            })),
        }
    }

    /// Append an entry. Write failures are logged, never surfaced.
    pub async fn record(&self, entry: ActivityEntry) {
        let writer = self.writer.lock().await;
        if let Err(e) = writer.write(&entry) {
            tracing::warn!(error = %e, path = %writer.path.display(), "Failed to write activity log");
        }
    }
}
