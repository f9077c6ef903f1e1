use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Task;
use crate::ops::list_ops;
use crate::tui::app::{App, Screen};
use crate::tui::form::{FormContext, FormSubmission};

enum FormEvent {
    None,
    Cancel,
    Submit,
}

/// Drive the task form while it is the top of the stack. Submit and cancel
/// are resolved here, synchronously, into the context that opened the form.
pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    let mut event = FormEvent::None;
    if let Some(Screen::Form(form)) = app.screens.last_mut() {
        match key.code {
            KeyCode::Esc => event = FormEvent::Cancel,
            KeyCode::Enter => event = FormEvent::Submit,
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left => form.focused_mut().left(),
            KeyCode::Right => form.focused_mut().right(),
            KeyCode::Home => form.focused_mut().home(),
            KeyCode::End => form.focused_mut().end(),
            KeyCode::Backspace => form.focused_mut().backspace(),
            KeyCode::Delete => form.focused_mut().delete(),
            KeyCode::Char(c) => form.focused_mut().insert(c),
            _ => {}
        }
    }

    match event {
        // Cancel discards the buffered edits; the live task was never touched
        FormEvent::Cancel => {
            app.pop_screen();
        }
        FormEvent::Submit => submit_form(app),
        FormEvent::None => {}
    }
}

fn submit_form(app: &mut App) {
    let submission = if let Some(Screen::Form(form)) = app.screens.last() {
        form.submit().map(|s| (form.context, s))
    } else {
        None
    };
    // Empty title: the screen stays open
    let Some((context, submission)) = submission else {
        return;
    };
    app.pop_screen();
    apply_submission(app, context, submission);
}

fn apply_submission(app: &mut App, context: FormContext, submission: FormSubmission) {
    match context {
        FormContext::Add { above } => {
            let position = match app.list.cursor() {
                Some(i) => {
                    if above {
                        i
                    } else {
                        i + 1
                    }
                }
                None => app.list.len(),
            };
            let mut task = Task::new(submission.title.clone());
            task.description = submission.description;
            task.future_date = submission.future_date;
            if list_ops::insert(&mut app.list, task, position).is_ok() {
                app.save_tasks();
                app.log_action(&format!("Added task: '{}'", submission.title));
            }
        }
        FormContext::Edit { id } | FormContext::ReviewEdit { id } => {
            let Some(index) = app.list.find_index(id) else {
                return;
            };
            let edited = list_ops::edit_in_place(
                &mut app.list,
                index,
                submission.title.clone(),
                submission.description,
                submission.future_date,
            );
            if edited.is_ok() {
                // From the main screen the cursor lands on the edited task;
                // review keeps its own cursor
                if matches!(context, FormContext::Edit { .. }) {
                    app.list.set_cursor(Some(index));
                }
                app.save_tasks();
                app.log_action(&format!("Edited task: '{}'", submission.title));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use crate::model::Task;
    use crate::tui::app::{App, Screen};
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::test_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn titles(app: &App) -> Vec<&str> {
        app.list.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn add_below_inserts_after_cursor() {
        let (_dir, mut app) = test_app(vec![Task::new("a"), Task::new("b")]);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "new");
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app), vec!["a", "new", "b"]);
        assert_eq!(app.list.cursor(), Some(1));
        assert!(app.screens.is_empty());
        assert!(
            app.log
                .entries()
                .last()
                .unwrap()
                .ends_with("Added task: 'new'")
        );
        assert_eq!(app.store.load_tasks().len(), 3);
    }

    #[test]
    fn add_above_inserts_at_cursor() {
        let (_dir, mut app) = test_app(vec![Task::new("a"), Task::new("b")]);
        app.list.set_cursor(Some(1));
        press(&mut app, KeyCode::Char('A'));
        type_text(&mut app, "new");
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app), vec!["a", "new", "b"]);
        assert_eq!(app.list.cursor(), Some(1));
    }

    #[test]
    fn add_with_no_selection_appends() {
        let (_dir, mut app) = test_app(vec![]);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "only");
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app), vec!["only"]);
        assert_eq!(app.list.cursor(), Some(0));
    }

    #[test]
    fn edit_updates_fields_without_relocating() {
        let (_dir, mut app) = test_app(vec![Task::new("a"), Task::new("b"), Task::new("c")]);
        app.list.set_cursor(Some(1));
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "notes");
        press(&mut app, KeyCode::Enter);

        assert_eq!(titles(&app), vec!["a", "b2", "c"]);
        assert_eq!(app.list.cursor(), Some(1));
        assert_eq!(app.list.tasks()[1].description, "notes");
        assert!(
            app.log
                .entries()
                .last()
                .unwrap()
                .ends_with("Edited task: 'b2'")
        );
        assert_eq!(app.store.load_tasks()[1].title, "b2");
    }

    #[test]
    fn empty_title_keeps_the_form_open() {
        let (_dir, mut app) = test_app(vec![]);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.screens.last(), Some(Screen::Form(_))));
        assert!(app.list.is_empty());
        assert!(app.log.entries().is_empty());
    }

    #[test]
    fn cancel_discards_buffered_edits() {
        let (_dir, mut app) = test_app(vec![Task::new("keep me")]);
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, " not");
        press(&mut app, KeyCode::Esc);

        assert!(app.screens.is_empty());
        assert_eq!(titles(&app), vec!["keep me"]);
        assert!(app.log.entries().is_empty());
    }
}
