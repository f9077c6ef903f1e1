use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque per-instance task identity, stable for the lifetime of the process.
/// Assigned by `TaskList`; never serialized, so it stays valid across the
/// review screen's decision map but not across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Placeholder for tasks not yet owned by a `TaskList`.
    pub const UNASSIGNED: TaskId = TaskId(0);
}

/// A single todo entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Runtime-only identity
    #[serde(skip)]
    pub id: TaskId,
    /// Required, non-empty after trimming
    pub title: String,
    /// Free-form text; may contain embedded line breaks
    #[serde(default)]
    pub description: String,
    /// Resolved tasks sink to the end of priority order
    #[serde(default)]
    pub resolved: bool,
    /// Optional target date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_date: Option<NaiveDate>,
}

impl Task {
    /// Create an unresolved task with the given title and no description or date.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: TaskId::UNASSIGNED,
            title: title.into(),
            description: String::new(),
            resolved: false,
            future_date: None,
        }
    }
}

// Content equality; the runtime id is deliberately excluded so persistence
// round-trips compare equal.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.resolved == other.resolved
            && self.future_date == other.future_date
    }
}

impl Eq for Task {}
