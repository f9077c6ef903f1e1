use chrono::NaiveDate;

use crate::model::{Task, TaskId};
use crate::util::unicode;

/// Expected format for the optional future date field
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Who opened the form and what to do with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormContext {
    /// New task, inserted above or below the current selection
    Add { above: bool },
    /// Edit of an existing task from the main screen
    Edit { id: TaskId },
    /// Edit of an existing task from inside the review screen
    ReviewEdit { id: TaskId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Date,
}

/// A single-line text input with a grapheme-aware byte cursor
#[derive(Debug, Clone, Default)]
pub struct FieldBuffer {
    pub text: String,
    pub cursor: usize,
}

impl FieldBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        FieldBuffer { text, cursor }
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Terminal-cell offset of the cursor, for placing the visible cursor.
    pub fn cursor_cells(&self) -> usize {
        unicode::display_width(&self.text[..self.cursor])
    }
}

/// The fields of a completed form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub title: String,
    pub description: String,
    pub future_date: Option<NaiveDate>,
}

/// Modal add-or-edit screen state. All edits are buffered here; the live
/// task is only touched when the opener applies a submission, so cancel
/// discards everything by simply dropping the form.
#[derive(Debug)]
pub struct TaskForm {
    pub context: FormContext,
    pub title: FieldBuffer,
    pub description: FieldBuffer,
    pub date: FieldBuffer,
    pub focus: FormField,
}

impl TaskForm {
    /// Empty form for a new task.
    pub fn add(above: bool) -> Self {
        TaskForm {
            context: FormContext::Add { above },
            title: FieldBuffer::default(),
            description: FieldBuffer::default(),
            date: FieldBuffer::default(),
            focus: FormField::Title,
        }
    }

    /// Form prefilled from an existing task. Real newlines in the
    /// description show up as the literal `\n` separator they were typed as.
    pub fn edit(task: &Task, context: FormContext, focus: FormField) -> Self {
        let date = task
            .future_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        TaskForm {
            context,
            title: FieldBuffer::new(task.title.clone()),
            description: FieldBuffer::new(task.description.replace('\n', "\\n")),
            date: FieldBuffer::new(date),
            focus,
        }
    }

    pub fn focused_mut(&mut self) -> &mut FieldBuffer {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Date => &mut self.date,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Date,
            FormField::Date => FormField::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Date,
            FormField::Description => FormField::Title,
            FormField::Date => FormField::Description,
        };
    }

    /// Validate and collect the buffered input. An empty trimmed title
    /// rejects the submission (the screen stays open); an unparseable date
    /// is dropped, not an error.
    pub fn submit(&self) -> Option<FormSubmission> {
        let title = self.title.text.trim();
        if title.is_empty() {
            tracing::debug!("title is required, submission rejected");
            return None;
        }
        Some(FormSubmission {
            title: title.to_string(),
            description: join_paragraphs(self.description.text.trim()),
            future_date: parse_future_date(self.date.text.trim()),
        })
    }
}

/// Parse a `DD.MM.YYYY` date; anything else silently yields no date.
pub fn parse_future_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::debug!(input = s, "unparseable future date, saving without one");
            None
        }
    }
}

/// Convert typed literal `\n` paragraph separators into real newlines.
pub fn join_paragraphs(s: &str) -> String {
    s.split("\\n").collect::<Vec<_>>().join("\n")
}
