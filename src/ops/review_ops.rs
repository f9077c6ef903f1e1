use std::collections::HashMap;

use crate::model::{TaskId, TaskList};
use crate::ops::list_ops;

/// Per-task verdict collected by the review screen. `Keep` is the default;
/// `Reopen` and `Delete` are mutually exclusive toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Keep,
    Reopen,
    Delete,
}

/// One applied decision, returned so the caller can write the action log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Deleted { title: String },
    Reopened { title: String },
}

/// A batch triage pass over the tasks that were resolved when it opened.
///
/// Holds only task ids, never tasks: the live list stays the single owner,
/// and nested edits made during the review show through immediately. Tasks
/// resolved after the session opened are not part of the snapshot.
#[derive(Debug)]
pub struct ReviewSession {
    snapshot: Vec<TaskId>,
    decisions: HashMap<TaskId, ReviewDecision>,
    cursor: usize,
}

impl ReviewSession {
    /// Snapshot the currently resolved tasks, in list order, every decision
    /// starting at `Keep`. Returns None when nothing is resolved.
    pub fn open(list: &TaskList) -> Option<Self> {
        let snapshot: Vec<TaskId> = list
            .tasks()
            .iter()
            .filter(|t| t.resolved)
            .map(|t| t.id)
            .collect();
        if snapshot.is_empty() {
            return None;
        }
        let decisions = snapshot
            .iter()
            .map(|id| (*id, ReviewDecision::Keep))
            .collect();
        Some(ReviewSession {
            snapshot,
            decisions,
            cursor: 0,
        })
    }

    pub fn snapshot(&self) -> &[TaskId] {
        &self.snapshot
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn decision(&self, id: TaskId) -> ReviewDecision {
        self.decisions
            .get(&id)
            .copied()
            .unwrap_or(ReviewDecision::Keep)
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.snapshot.get(self.cursor).copied()
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.snapshot.len() {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Keep ↔ Reopen; a pending Delete is replaced by Reopen.
    pub fn toggle_reopen(&mut self) {
        self.toggle(ReviewDecision::Reopen);
    }

    /// Keep ↔ Delete; a pending Reopen is replaced by Delete.
    pub fn toggle_delete(&mut self) {
        self.toggle(ReviewDecision::Delete);
    }

    fn toggle(&mut self, target: ReviewDecision) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let current = self.decision(id);
        let next = if current == target {
            ReviewDecision::Keep
        } else {
            target
        };
        self.decisions.insert(id, next);
    }

    /// Apply every decision in snapshot order against the live list and
    /// return what happened for logging. Tasks are addressed by id, so a
    /// decision lands on the right task no matter where it sits by apply
    /// time. Afterwards the first remaining task is selected.
    ///
    /// Consumes the session; cancelling is simply dropping it unapplied.
    pub fn apply(self, list: &mut TaskList) -> Vec<ReviewOutcome> {
        let mut outcomes = Vec::new();
        for id in &self.snapshot {
            match self.decision(*id) {
                ReviewDecision::Keep => {}
                ReviewDecision::Delete => {
                    if let Some(task) = list_ops::remove_by_id(list, *id) {
                        outcomes.push(ReviewOutcome::Deleted { title: task.title });
                    }
                }
                ReviewDecision::Reopen => {
                    if list_ops::reopen_to_front(list, *id)
                        && let Some(task) = list.tasks().first()
                    {
                        outcomes.push(ReviewOutcome::Reopened {
                            title: task.title.clone(),
                        });
                    }
                }
            }
        }
        let cursor = if list.is_empty() { None } else { Some(0) };
        list.set_cursor(cursor);
        outcomes
    }
}
