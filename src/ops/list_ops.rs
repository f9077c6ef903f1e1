use chrono::NaiveDate;

use crate::model::{Task, TaskId, TaskList};

/// Error type for list operations
#[derive(Debug, thiserror::Error)]
pub enum ListOpError {
    #[error("invalid insert position: {0}")]
    InvalidPosition(usize),
    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Insert a task at `position` (0..=len) and select it.
/// Tasks without an id are assigned one here.
pub fn insert(list: &mut TaskList, mut task: Task, position: usize) -> Result<(), ListOpError> {
    if position > list.len() {
        return Err(ListOpError::InvalidPosition(position));
    }
    if task.id == TaskId::UNASSIGNED {
        task.id = list.alloc_id();
    }
    list.tasks_mut().insert(position, task);
    list.set_cursor(Some(position));
    Ok(())
}

/// Remove and return the task at `index`. The cursor moves to the task that
/// slid into its place, clamped to the new end; none when the list empties.
pub fn remove_at(list: &mut TaskList, index: usize) -> Result<Task, ListOpError> {
    if index >= list.len() {
        return Err(ListOpError::IndexOutOfRange(index));
    }
    let task = list.tasks_mut().remove(index);
    if list.is_empty() {
        list.set_cursor(None);
    } else {
        list.set_cursor(Some(index.min(list.len() - 1)));
    }
    Ok(task)
}

/// Swap the task at `index` with its predecessor. No-op at the top.
/// Returns whether a swap happened; the cursor follows the task.
pub fn move_up(list: &mut TaskList, index: usize) -> bool {
    if index == 0 || index >= list.len() {
        return false;
    }
    list.tasks_mut().swap(index, index - 1);
    list.set_cursor(Some(index - 1));
    true
}

/// Swap the task at `index` with its successor. No-op at the bottom.
pub fn move_down(list: &mut TaskList, index: usize) -> bool {
    if list.is_empty() || index + 1 >= list.len() {
        return false;
    }
    list.tasks_mut().swap(index, index + 1);
    list.set_cursor(Some(index + 1));
    true
}

/// Flip the resolved state of the task at `index` and relocate it: newly
/// resolved tasks sink to the end, newly unresolved tasks rise to the front.
/// Returns the new resolved state.
///
/// The cursor stays near where the task used to be (so repeated resolves walk
/// down the remaining unresolved tasks), except that unresolving follows the
/// task to the top.
pub fn toggle_resolved(list: &mut TaskList, index: usize) -> Result<bool, ListOpError> {
    if index >= list.len() {
        return Err(ListOpError::IndexOutOfRange(index));
    }
    let mut task = list.tasks_mut().remove(index);
    task.resolved = !task.resolved;
    let resolved = task.resolved;
    if resolved {
        list.tasks_mut().push(task);
        let len = list.len();
        let cursor = if len > 1 { index.min(len - 2) } else { 0 };
        list.set_cursor(Some(cursor));
    } else {
        list.tasks_mut().insert(0, task);
        list.set_cursor(Some(0));
    }
    Ok(resolved)
}

/// Overwrite the editable fields of the task at `index` without relocating it.
pub fn edit_in_place(
    list: &mut TaskList,
    index: usize,
    title: String,
    description: String,
    future_date: Option<NaiveDate>,
) -> Result<(), ListOpError> {
    let task = list
        .tasks_mut()
        .get_mut(index)
        .ok_or(ListOpError::IndexOutOfRange(index))?;
    task.title = title;
    task.description = description;
    task.future_date = future_date;
    Ok(())
}

/// Remove the task with the given id, wherever it currently sits.
/// Used by review apply, where tasks are addressed by identity rather than
/// position because earlier decisions may have shifted indices.
pub fn remove_by_id(list: &mut TaskList, id: TaskId) -> Option<Task> {
    let index = list.find_index(id)?;
    remove_at(list, index).ok()
}

/// Mark the task with the given id unresolved and move it to the front.
/// Returns whether the task was found.
pub fn reopen_to_front(list: &mut TaskList, id: TaskId) -> bool {
    let Some(index) = list.find_index(id) else {
        return false;
    };
    let mut task = list.tasks_mut().remove(index);
    task.resolved = false;
    list.tasks_mut().insert(0, task);
    list.set_cursor(Some(0));
    true
}
