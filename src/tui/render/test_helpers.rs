use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::Store;
use crate::model::{Task, TaskList};
use crate::tui::app::App;

/// Render into a test backend and return the buffer as text, with
/// trailing spaces and trailing blank lines trimmed.
pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            draw(frame, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut lines = Vec::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// An `App` over a throwaway store, seeded with the given tasks. The
/// `TempDir` must be kept alive for the app's lifetime.
pub fn test_app(tasks: Vec<Task>) -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(Store::new(dir.path()));
    app.list = TaskList::from_tasks(tasks);
    (dir, app)
}
