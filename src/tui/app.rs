use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store::Store;
use crate::model::{ActionLog, TaskList};
use crate::ops::review_ops::ReviewSession;
use crate::tui::form::TaskForm;

use super::input;
use super::render;
use super::theme::Theme;

/// A modal context that owns key input while it is on the stack
#[derive(Debug)]
pub enum Screen {
    Form(TaskForm),
    Review(ReviewSession),
}

/// Main application state: the live task list, the action log, the modal
/// screen stack, and view bookkeeping. The stack is the only input guard;
/// keys route to its top, or to the main screen table when it is empty.
pub struct App {
    pub list: TaskList,
    pub log: ActionLog,
    pub store: Store,
    /// LIFO modal stack, depth at most 2 (form, review, or form over review)
    pub screens: Vec<Screen>,
    pub show_help: bool,
    pub show_log: bool,
    /// Transient message for the status row, cleared on the next key
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub theme: Theme,
    /// First visible row of the main list
    pub scroll_offset: usize,
    /// First visible row of the review list
    pub review_scroll: usize,
}

impl App {
    /// Load persisted state from the store and start with the first task
    /// selected. Missing or corrupt files degrade to an empty list and log.
    pub fn new(store: Store) -> Self {
        let list = TaskList::from_tasks(store.load_tasks());
        let log = ActionLog::from_entries(store.load_log());
        App {
            list,
            log,
            store,
            screens: Vec::new(),
            show_help: false,
            show_log: false,
            status_message: None,
            should_quit: false,
            theme: Theme::default(),
            scroll_offset: 0,
            review_scroll: 0,
        }
    }

    pub fn push_screen(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    pub fn pop_screen(&mut self) -> Option<Screen> {
        self.screens.pop()
    }

    /// The review session anywhere on the stack (it may sit under a form).
    pub fn review_session(&self) -> Option<&ReviewSession> {
        self.screens.iter().find_map(|s| match s {
            Screen::Review(session) => Some(session),
            _ => None,
        })
    }

    /// Persist the full task list; failures become a status message.
    pub fn save_tasks(&mut self) {
        if let Err(e) = self.store.save_tasks(self.list.tasks()) {
            tracing::error!(error = %e, "failed to save tasks");
            self.status_message = Some(format!("save failed: {}", e));
        }
    }

    /// Append to the action log and persist it.
    pub fn log_action(&mut self, message: &str) {
        self.log.append(message);
        if let Err(e) = self.store.save_log(self.log.entries()) {
            tracing::error!(error = %e, "failed to save action log");
            self.status_message = Some(format!("log save failed: {}", e));
        }
    }
}

/// Run the TUI application against the given data directory
pub fn run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::new(dir);
    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Final save, matching the per-mutation saves
    app.save_tasks();
    let _ = app.store.save_log(app.log.entries());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
