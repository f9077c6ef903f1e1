use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::review_ops::ReviewOutcome;
use crate::tui::app::{App, Screen};
use crate::tui::form::{FormContext, FormField, TaskForm};

enum ReviewEvent {
    None,
    Cancel,
    Apply,
    Edit,
}

/// Drive the review screen while it is the top of the stack
pub(super) fn handle_review_key(app: &mut App, key: KeyEvent) {
    let mut event = ReviewEvent::None;
    if let Some(Screen::Review(session)) = app.screens.last_mut() {
        match key.code {
            KeyCode::Esc => event = ReviewEvent::Cancel,
            KeyCode::Char('w') => event = ReviewEvent::Apply,
            KeyCode::Char('e') | KeyCode::Enter => event = ReviewEvent::Edit,
            KeyCode::Char('j') | KeyCode::Down => session.select_next(),
            KeyCode::Char('k') | KeyCode::Up => session.select_prev(),
            KeyCode::Char('r') => session.toggle_reopen(),
            KeyCode::Char('d') => session.toggle_delete(),
            _ => {}
        }
    }

    match event {
        // Decisions are discarded wholesale; nested edits already committed
        ReviewEvent::Cancel => {
            app.pop_screen();
        }
        ReviewEvent::Apply => apply_review(app),
        ReviewEvent::Edit => open_review_edit(app),
        ReviewEvent::None => {}
    }
}

fn apply_review(app: &mut App) {
    let Some(Screen::Review(session)) = app.pop_screen() else {
        return;
    };
    let outcomes = session.apply(&mut app.list);
    for outcome in &outcomes {
        match outcome {
            ReviewOutcome::Deleted { title } => {
                app.log_action(&format!("Deleted task: '{}'", title));
            }
            ReviewOutcome::Reopened { title } => {
                app.log_action(&format!("Reopened task: '{}'", title));
            }
        }
    }
    // One persist for the whole batch
    app.save_tasks();
}

fn open_review_edit(app: &mut App) {
    let Some(id) = app.review_session().and_then(|s| s.selected_id()) else {
        return;
    };
    let Some(index) = app.list.find_index(id) else {
        return;
    };
    let task = &app.list.tasks()[index];
    let form = TaskForm::edit(task, FormContext::ReviewEdit { id }, FormField::Title);
    app.push_screen(Screen::Form(form));
}
