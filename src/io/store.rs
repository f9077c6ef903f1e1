use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Task;

const TASKS_FILE: &str = "tasks.json";
const LOGS_FILE: &str = "logs.json";

/// Error type for persistence operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not replace state file: {0}")]
    Replace(#[from] tempfile::PersistError),
}

/// Whole-file JSON persistence for the task list and the action log.
///
/// Loads degrade to empty on any failure (missing file, unreadable file,
/// malformed JSON); the cause is traced but never surfaced as an error.
/// Saves overwrite the prior state wholesale, atomically via a temp file
/// in the same directory.
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.dir.join(LOGS_FILE)
    }

    /// Load the task list; empty on any read or parse failure. A missing
    /// file is the normal first run; other failures are traced.
    pub fn load_tasks(&self) -> Vec<Task> {
        let path = self.tasks_path();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read tasks file");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding malformed tasks file");
                Vec::new()
            }
        }
    }

    /// Persist the full task list, replacing the previous file.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(&self.tasks_path(), &content)
    }

    /// Load the action log; empty on any read or parse failure.
    pub fn load_log(&self) -> Vec<String> {
        let path = self.logs_path();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read log file");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding malformed log file");
                Vec::new()
            }
        }
    }

    /// Persist the full action log, replacing the previous file.
    pub fn save_log(&self, entries: &[String]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries)?;
        self.write_atomic(&self.logs_path(), &content)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path)?;
        Ok(())
    }
}
