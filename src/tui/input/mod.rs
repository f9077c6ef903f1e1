mod form;
mod navigate;
mod review;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Screen};

/// Handle a key event: the top of the modal stack owns input exclusively;
/// the main screen table applies only when the stack is empty.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Any key dismisses the help overlay; h and Esc do only that, every
    // other key still reaches its command
    if app.show_help {
        app.show_help = false;
        if matches!(key.code, KeyCode::Char('h') | KeyCode::Esc) {
            return;
        }
    }

    // Status messages are transient
    app.status_message = None;

    match app.screens.last() {
        Some(Screen::Form(_)) => form::handle_form_key(app, key),
        Some(Screen::Review(_)) => review::handle_review_key(app, key),
        None => navigate::handle_navigate(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::tui::render::test_helpers::test_app;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn help_closes_on_h_and_esc_without_side_effects() {
        let (_dir, mut app) = test_app(vec![Task::new("a")]);
        app.show_help = true;
        press(&mut app, KeyCode::Char('h'));
        assert!(!app.show_help);
        assert!(app.screens.is_empty());

        app.show_help = true;
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn commands_stay_live_under_help() {
        let (_dir, mut app) = test_app(vec![Task::new("a"), Task::new("b")]);
        app.show_help = true;
        press(&mut app, KeyCode::Char('j'));
        assert!(!app.show_help);
        assert_eq!(app.list.cursor(), Some(1));

        app.show_help = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
