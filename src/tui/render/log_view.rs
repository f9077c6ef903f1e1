use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::app::App;

/// Bottom panel with the most recent action-log entries, toggled with `L`
pub fn render_log_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::bordered()
        .title(" Action log ")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .log
        .recent(inner.height as usize)
        .iter()
        .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(theme.dim))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn shows_most_recent_entries() {
        let (_dir, mut app) = test_app(vec![]);
        for i in 0..20 {
            app.log.append(&format!("entry {}", i));
        }
        let output = render_to_string(60, 6, |frame, area| {
            render_log_view(frame, &app, area);
        });
        // 4 inner rows: the last four entries
        assert!(!output.contains("entry 15"), "{}", output);
        assert!(output.contains("entry 16"), "{}", output);
        assert!(output.contains("entry 19"), "{}", output);
    }
}
