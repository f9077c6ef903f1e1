use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::review_ops::ReviewDecision;
use crate::tui::app::App;

/// The review screen: the snapshot of resolved tasks with their pending
/// decisions. Rows show the task's live title, so nested edits are visible
/// immediately.
pub fn render_review_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(session) = app.review_session() else {
        return;
    };
    let cursor = session.cursor();
    let rows: Vec<(ReviewDecision, String)> = session
        .snapshot()
        .iter()
        .map(|id| {
            let title = app
                .list
                .find_index(*id)
                .map(|i| app.list.tasks()[i].title.clone())
                .unwrap_or_default();
            (session.decision(*id), title)
        })
        .collect();

    let theme = app.theme.clone();
    let body_height = area.height.saturating_sub(2) as usize;
    app.review_scroll = super::helpers::clamp_scroll(app.review_scroll, cursor, body_height);

    let mut lines = vec![
        Line::from(Span::styled(
            "Review resolved tasks",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (i, (decision, title)) in rows
        .iter()
        .enumerate()
        .skip(app.review_scroll)
        .take(body_height)
    {
        let selected = i == cursor;
        let prefix = if selected { "\u{25B8} " } else { "  " };
        let (marker, marker_style) = match decision {
            ReviewDecision::Keep => ("[ ] ", Style::default().fg(theme.dim)),
            ReviewDecision::Reopen => ("[R] ", Style::default().fg(theme.green)),
            ReviewDecision::Delete => ("[D] ", Style::default().fg(theme.red)),
        };
        let mut title_style = Style::default().fg(theme.text);
        if selected {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let mut line = Line::from(vec![
            Span::styled(format!("{}{}", prefix, marker), marker_style),
            Span::styled(title.clone(), title_style),
        ]);
        if selected {
            line = line.style(Style::default().bg(theme.selection_bg));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), area);
}
