use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::list_ops;
use crate::ops::review_ops::ReviewSession;
use crate::tui::app::{App, Screen};
use crate::tui::form::{FormContext, FormField, TaskForm};

/// Main screen key table, active only with an empty modal stack
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.list.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.list.select_prev(),
        KeyCode::Char('J') => move_selected_down(app),
        KeyCode::Char('K') => move_selected_up(app),
        KeyCode::Char('A') => open_add_form(app, true),
        KeyCode::Char('a') => open_add_form(app, false),
        KeyCode::Char('d') => delete_selected(app),
        KeyCode::Char('r') => toggle_selected_resolved(app),
        KeyCode::Char('e') | KeyCode::Char('o') | KeyCode::Enter => {
            open_edit_form(app, FormField::Title)
        }
        KeyCode::Char('E') => open_edit_form(app, FormField::Description),
        KeyCode::Char('R') => open_review(app),
        KeyCode::Char('h') => app.show_help = true,
        KeyCode::Char('L') => app.show_log = !app.show_log,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn move_selected_up(app: &mut App) {
    let Some(index) = app.list.cursor() else {
        return;
    };
    if list_ops::move_up(&mut app.list, index) {
        let title = app.list.tasks()[index - 1].title.clone();
        app.save_tasks();
        app.log_action(&format!("Moved up task: '{}'", title));
    }
}

fn move_selected_down(app: &mut App) {
    let Some(index) = app.list.cursor() else {
        return;
    };
    if list_ops::move_down(&mut app.list, index) {
        let title = app.list.tasks()[index + 1].title.clone();
        app.save_tasks();
        app.log_action(&format!("Moved down task: '{}'", title));
    }
}

fn delete_selected(app: &mut App) {
    let Some(index) = app.list.cursor() else {
        return;
    };
    if let Ok(task) = list_ops::remove_at(&mut app.list, index) {
        app.save_tasks();
        app.log_action(&format!("Deleted task: '{}'", task.title));
    }
}

fn toggle_selected_resolved(app: &mut App) {
    let Some(index) = app.list.cursor() else {
        return;
    };
    let title = app.list.tasks()[index].title.clone();
    if let Ok(resolved) = list_ops::toggle_resolved(&mut app.list, index) {
        app.save_tasks();
        let verb = if resolved { "Resolved" } else { "Unresolved" };
        app.log_action(&format!("{} task: '{}'", verb, title));
    }
}

fn open_add_form(app: &mut App, above: bool) {
    app.push_screen(Screen::Form(TaskForm::add(above)));
}

fn open_edit_form(app: &mut App, focus: FormField) {
    let Some(task) = app.list.selected() else {
        return;
    };
    let form = TaskForm::edit(task, FormContext::Edit { id: task.id }, focus);
    app.push_screen(Screen::Form(form));
}

fn open_review(app: &mut App) {
    match ReviewSession::open(&app.list) {
        Some(session) => {
            app.review_scroll = 0;
            app.push_screen(Screen::Review(session));
        }
        None => app.status_message = Some("no resolved tasks to review".to_string()),
    }
}
