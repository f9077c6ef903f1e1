use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::tui::form::DATE_FORMAT;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// The main task list: one row per task, in priority order
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.list.is_empty() {
        let hint = Span::styled(
            "no tasks, press 'a' to add one",
            Style::default().fg(app.theme.dim),
        );
        frame.render_widget(Paragraph::new(Line::from(hint)), area);
        return;
    }

    let height = area.height as usize;
    let cursor = app.list.cursor().unwrap_or(0);
    app.scroll_offset = super::helpers::clamp_scroll(app.scroll_offset, cursor, height);

    let mut lines = Vec::new();
    for (i, task) in app
        .list
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        lines.push(task_row(
            task,
            app.list.cursor() == Some(i),
            &app.theme,
            area.width as usize,
        ));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn task_row(task: &Task, selected: bool, theme: &Theme, width: usize) -> Line<'static> {
    let prefix = if selected { "\u{25B8} " } else { "  " };
    let marker = if task.resolved { "[x] " } else { "[ ] " };

    let marker_style = if task.resolved {
        Style::default().fg(theme.dim)
    } else {
        Style::default().fg(theme.green)
    };
    let mut title_style = if task.resolved {
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text)
    };
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let date = task
        .future_date
        .map(|d| format!("  {}", d.format(DATE_FORMAT)));
    let date_width = date.as_deref().map_or(0, unicode::display_width);
    let title_budget = width.saturating_sub(6 + date_width);

    let mut spans = vec![
        Span::styled(format!("{}{}", prefix, marker), marker_style),
        Span::styled(unicode::truncate_to_width(&task.title, title_budget), title_style),
    ];
    if let Some(date) = date {
        spans.push(Span::styled(date, Style::default().fg(theme.dim)));
    }

    let mut line = Line::from(spans);
    if selected {
        line = line.style(Style::default().bg(theme.selection_bg));
    }
    line
}
