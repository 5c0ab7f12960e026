//! Append-only, mutex-serialized audit log writer.
//!
//! One JSON object per line, UTF-8, newline-terminated. The file is opened
//! in create/append mode at construction and never rewritten; writes are
//! serialized under a mutex and every append is flushed and fsync'd to
//! durable storage before returning.

use crate::error::{LogError, Result};
use crate::model::LogEntry;
use crate::signature::sign;
use serde::de::Error as _;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

pub struct AuditLogWriter {
    path: PathBuf,
    file: Mutex<File>,
}

impl AuditLogWriter {
    /// Opens (creating if absent) the append-only log file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.display().to_string(),
                source,
            })?;
        info!(path = %path.display(), "audit log opened");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes `report` to a JSON object, signs its canonical form, and
    /// appends the signed line under the writer's mutex.
    pub fn append<T: Serialize>(&self, report: &T) -> Result<LogEntry> {
        let value = serde_json::to_value(report)?;
        let fields = value
            .as_object()
            .cloned()
            .ok_or_else(|| LogError::Serialize(serde::de::Error::custom("report did not serialize to a JSON object")))?;

        let signature = sign(&serde_json::Value::Object(fields.clone()));
        let entry = LogEntry { fields, signature };

        let line = serde_json::to_string(&entry)?;
        let mut file = self.file.lock().expect("audit log mutex poisoned");
        file.write_all(line.as_bytes()).map_err(LogError::Append)?;
        file.write_all(b"\n").map_err(LogError::Append)?;
        file.flush().map_err(LogError::Append)?;
        file.sync_all().map_err(LogError::Flush)?;
        debug!(signature = %entry.signature, "audit log entry appended");

        Ok(entry)
    }
}
