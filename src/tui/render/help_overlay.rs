use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::app::App;

const HELP_ROWS: &[(&str, &str)] = &[
    ("j / k", "move selection down / up"),
    ("J / K", "move task down / up in priority"),
    ("a / A", "add task below / above selection"),
    ("e, Enter", "edit task (title focused)"),
    ("E", "edit task (description focused)"),
    ("d", "delete task"),
    ("r", "resolve / unresolve task"),
    ("R", "review resolved tasks"),
    ("L", "toggle action log panel"),
    ("q", "quit"),
    ("", ""),
    ("review:", ""),
    ("r / d", "toggle reopen / delete decision"),
    ("e, Enter", "edit task"),
    ("w", "apply all decisions"),
    ("Esc", "cancel without applying"),
];

/// Centered key-binding reference, toggled with `h`
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let popup = super::helpers::centered_rect(52, HELP_ROWS.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    let block = Block::bordered()
        .title(" Help ")
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<10}", key),
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.text)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn lists_main_and_review_bindings() {
        let (_dir, app) = test_app(vec![]);
        let output = render_to_string(60, 20, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains(" Help "), "{}", output);
        assert!(output.contains("review resolved tasks"), "{}", output);
        assert!(output.contains("apply all decisions"), "{}", output);
    }
}
