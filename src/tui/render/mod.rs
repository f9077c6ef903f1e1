pub mod form_view;
pub mod help_overlay;
mod helpers;
pub mod list_view;
pub mod log_view;
pub mod review_view;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Screen};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | optional log panel | status row
    let mut constraints = vec![Constraint::Min(1)];
    if app.show_log {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // The review screen replaces the list while it is anywhere on the stack
    if app.review_session().is_some() {
        review_view::render_review_view(frame, app, chunks[0]);
    } else {
        list_view::render_list_view(frame, app, chunks[0]);
    }

    if app.show_log {
        log_view::render_log_view(frame, app, chunks[1]);
    }
    status_row::render_status_row(frame, app, chunks[chunks.len() - 1]);

    // Form popup on top of whichever view is underneath
    if matches!(app.screens.last(), Some(Screen::Form(_))) {
        form_view::render_form(frame, app, area);
    }

    // Help overlay on top of everything
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
