use chrono::Local;

/// Append-only record of user-initiated mutations.
///
/// Each entry is a fully formatted `[YYYY-MM-DD HH:MM:SS] message` string;
/// entries are never edited or reordered. The `App` persists the whole log
/// after every append.
#[derive(Debug, Default)]
pub struct ActionLog {
    entries: Vec<String>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        ActionLog { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a timestamped entry.
    pub fn append(&mut self, message: &str) {
        let entry = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        self.entries.push(entry);
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}
