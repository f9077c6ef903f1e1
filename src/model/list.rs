use crate::model::task::{Task, TaskId};

/// The authoritative ordered task collection plus the selection cursor.
///
/// Position in the list is priority; there is no separate priority field.
/// All structural mutation goes through `ops::list_ops`, which keeps the
/// cursor valid after every change. One `TaskList` is owned by the `App`
/// and passed by reference to every screen.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    cursor: Option<usize>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            cursor: None,
            next_id: 1,
        }
    }

    /// Take ownership of loaded tasks, assigning fresh runtime ids.
    /// The cursor starts on the first task, or none when empty.
    pub fn from_tasks(mut tasks: Vec<Task>) -> Self {
        let mut next_id = 1;
        for task in &mut tasks {
            task.id = TaskId(next_id);
            next_id += 1;
        }
        let cursor = if tasks.is_empty() { None } else { Some(0) };
        TaskList {
            tasks,
            cursor,
            next_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub(crate) fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Set the cursor, clamped into range; any value on an empty list is none.
    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = match cursor {
            Some(_) if self.tasks.is_empty() => None,
            Some(i) => Some(i.min(self.tasks.len() - 1)),
            None => None,
        };
    }

    /// The currently selected task, if any.
    pub fn selected(&self) -> Option<&Task> {
        self.tasks.get(self.cursor?)
    }

    /// Move the selection down one row; sticks at the last row.
    pub fn select_next(&mut self) {
        if let Some(i) = self.cursor
            && i + 1 < self.tasks.len()
        {
            self.cursor = Some(i + 1);
        }
    }

    /// Move the selection up one row; sticks at the first row.
    pub fn select_prev(&mut self) {
        if let Some(i) = self.cursor
            && i > 0
        {
            self.cursor = Some(i - 1);
        }
    }

    /// Current index of the task with the given id.
    pub fn find_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
