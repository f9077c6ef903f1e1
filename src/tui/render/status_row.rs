use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Screen};

const NAVIGATE_HINTS: &str = "j/k select | a add | e edit | r resolve | R review | h help | q quit";
const REVIEW_HINTS: &str = "r reopen | d delete | e edit | w apply | Esc cancel";
const FORM_HINTS: &str = "Tab next field | Enter save | Esc cancel";

/// One-line status bar: a transient message when present, otherwise key
/// hints for the active screen
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.yellow),
        ))
    } else {
        let hints = match app.screens.last() {
            Some(Screen::Form(_)) => FORM_HINTS,
            Some(Screen::Review(_)) => REVIEW_HINTS,
            None => NAVIGATE_HINTS,
        };
        Line::from(Span::styled(hints, Style::default().fg(theme.dim)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::review_ops::ReviewSession;
    use crate::tui::form::TaskForm;
    use crate::tui::render::test_helpers::{render_to_string, test_app};
    use crate::model::Task;

    #[test]
    fn status_message_wins_over_hints() {
        let (_dir, mut app) = test_app(vec![]);
        app.status_message = Some("no resolved tasks to review".into());
        let output = render_to_string(70, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "no resolved tasks to review");
    }

    #[test]
    fn hints_follow_the_top_screen() {
        let (_dir, mut app) = test_app(vec![]);
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, NAVIGATE_HINTS);

        app.push_screen(Screen::Form(TaskForm::add(false)));
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, FORM_HINTS);
    }

    #[test]
    fn review_hints_shown_during_review() {
        let mut done = Task::new("done");
        done.resolved = true;
        let (_dir, mut app) = test_app(vec![done]);
        let session = ReviewSession::open(&app.list).unwrap();
        app.push_screen(Screen::Review(session));
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, REVIEW_HINTS);
    }
}
