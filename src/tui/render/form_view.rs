use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::app::{App, Screen};
use crate::tui::form::FormField;

const LABEL_CELLS: u16 = 13;

/// The add/edit popup: three labeled input rows with a visible cursor on
/// the focused field
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(Screen::Form(form)) = app.screens.last() else {
        return;
    };
    let theme = &app.theme;

    let title = match form.context {
        crate::tui::form::FormContext::Add { above: true } => " Add task (above) ",
        crate::tui::form::FormContext::Add { above: false } => " Add task (below) ",
        _ => " Edit task ",
    };

    let popup = super::helpers::centered_rect(56, 5, area);
    frame.render_widget(Clear, popup);
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = [
        (FormField::Title, "Title:", &form.title),
        (FormField::Description, "Description:", &form.description),
        (FormField::Date, "Date:", &form.date),
    ];
    let mut lines = Vec::new();
    for (field, label, buffer) in rows {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<width$}", label, width = LABEL_CELLS as usize), label_style),
            Span::styled(buffer.text.clone(), Style::default().fg(theme.text)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // Terminal cursor on the focused field
    let (row, buffer) = match form.focus {
        FormField::Title => (0u16, &form.title),
        FormField::Description => (1, &form.description),
        FormField::Date => (2, &form.date),
    };
    let x = inner.x + LABEL_CELLS + buffer.cursor_cells() as u16;
    let y = inner.y + row;
    if x < inner.right() && y < inner.bottom() {
        frame.set_cursor_position((x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::tui::form::{FormContext, TaskForm};
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn renders_prefilled_edit_popup() {
        let mut task = Task::new("Water plants");
        task.future_date = chrono::NaiveDate::from_ymd_opt(2026, 3, 5);
        let (_dir, mut app) = test_app(vec![task]);
        let selected = app.list.selected().unwrap();
        let form = TaskForm::edit(
            selected,
            FormContext::Edit { id: selected.id },
            FormField::Title,
        );
        app.push_screen(Screen::Form(form));

        let output = render_to_string(60, 7, |frame, area| {
            render_form(frame, &app, area);
        });
        assert!(output.contains(" Edit task "), "{}", output);
        assert!(output.contains("Title:       Water plants"), "{}", output);
        assert!(output.contains("Description:"), "{}", output);
        assert!(output.contains("Date:        05.03.2026"), "{}", output);
    }

    #[test]
    fn add_popup_names_the_insert_direction() {
        let (_dir, mut app) = test_app(vec![]);
        app.push_screen(Screen::Form(TaskForm::add(true)));
        let output = render_to_string(60, 7, |frame, area| {
            render_form(frame, &app, area);
        });
        assert!(output.contains(" Add task (above) "), "{}", output);
    }
}
