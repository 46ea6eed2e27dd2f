use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Config;
use crate::core::Timer;
use crate::core::del::DeleteLogic;
use crate::core::timer::format_elapsed;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::store::RecordStore;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::formatting::format_mins;

use super::input;
use super::render;
use super::theme::{Theme, ThemeKind};

/// How often the elapsed-time label is refreshed when no key is pressed.
pub const TICK: Duration = Duration::from_secs(1);

/// What the content panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Message log
    Log,
    Entries,
    Summary,
    Chart,
    Heatmap,
}

/// Which input field has focus while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Task,
    Category,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit(Field),
    /// Typing an entry number to delete
    Delete,
}

/// Severity of a line in the message panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Warning,
}

pub struct App<C: Clock = SystemClock> {
    pub store: RecordStore,
    pub timer: Timer<C>,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub task_input: String,
    pub category_input: String,
    pub delete_input: String,
    pub messages: Vec<(Tone, String)>,
    pub export_file: String,
    pub should_quit: bool,
    /// Set after a first quit request while a timer is running
    pub quit_armed: bool,
}

impl App<SystemClock> {
    pub fn new(store: RecordStore, cfg: &Config) -> Self {
        Self::with_timer(store, Timer::new(), cfg)
    }
}

impl<C: Clock> App<C> {
    pub fn with_timer(store: RecordStore, timer: Timer<C>, cfg: &Config) -> Self {
        let theme_kind = ThemeKind::from_name(&cfg.theme);
        let mut app = App {
            store,
            timer,
            theme_kind,
            theme: Theme::for_kind(theme_kind),
            view: View::Log,
            mode: Mode::Navigate,
            task_input: String::new(),
            category_input: String::new(),
            delete_input: String::new(),
            messages: Vec::new(),
            export_file: cfg.export_file.clone(),
            should_quit: false,
            quit_armed: false,
        };
        app.say("Welcome to TimeLoom! 👋");
        app.say("Type the task and category, then press s to start the timer.");
        app
    }

    pub fn say(&mut self, msg: impl Into<String>) {
        self.messages.push((Tone::Normal, msg.into()));
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.messages.push((Tone::Warning, msg.into()));
        self.view = View::Log;
    }

    /// `Timer: HH:MM:SS`, zero while idle.
    pub fn timer_label(&self) -> String {
        let elapsed = self
            .timer
            .elapsed()
            .map(format_elapsed)
            .unwrap_or_else(|| "00:00:00".to_string());
        format!("Timer: {elapsed}")
    }

    pub fn start_timer(&mut self) {
        let result = self
            .timer
            .start(&self.task_input, &self.category_input)
            .map(|e| {
                format!(
                    "⏱ Timer started for task '{}' ({}) at {}",
                    e.task,
                    e.category,
                    e.start_str()
                )
            });

        match result {
            Ok(msg) => {
                self.say(msg);
                self.view = View::Log;
            }
            Err(e) => self.warn(e.to_string()),
        }
    }

    pub fn stop_timer(&mut self) {
        match self.timer.stop(&self.store) {
            Ok(entry) => {
                let end = entry.end_str();
                self.say(format!(
                    "✅ Timer stopped and logged at {} ({} mins)",
                    end,
                    format_mins(entry.minutes())
                ));
                self.view = View::Log;
            }
            Err(AppError::TimerNotRunning) => self.warn("Timer not running."),
            Err(e) => self.warn(format!("Could not save entry: {e}")),
        }
    }

    pub fn show(&mut self, view: View) {
        self.view = view;
    }

    pub fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggled();
        self.theme = Theme::for_kind(self.theme_kind);
        self.say(format!("🌗 Switched to {} Mode.", self.theme_kind.label()));
    }

    pub fn begin_delete(&mut self) {
        self.delete_input.clear();
        self.mode = Mode::Delete;
    }

    pub fn confirm_delete(&mut self) {
        self.mode = Mode::Navigate;
        let raw = std::mem::take(&mut self.delete_input);
        if raw.trim().is_empty() {
            return;
        }

        let Ok(index) = raw.trim().parse::<usize>() else {
            self.warn("Please enter a non-negative integer.");
            return;
        };

        match DeleteLogic::apply(&self.store, index) {
            Ok(true) => {
                self.say("Entry deleted successfully!");
                self.view = View::Entries;
            }
            Ok(false) => self.warn("Invalid entry number."),
            Err(e) => self.warn(format!("Could not delete entry: {e}")),
        }
    }

    pub fn export_csv(&mut self) {
        let file = self.export_file.clone();
        match ExportLogic::export_silent(&self.store, ExportFormat::Csv, &file) {
            Ok(Some(path)) => self.say(format!("💾 Data exported to '{}'", path.display())),
            Ok(None) => self.warn("No data to export."),
            Err(e) => self.warn(format!("Export failed: {e}")),
        }
    }

    /// Quit, asking for a second press when a timer would be lost.
    pub fn request_quit(&mut self) {
        if self.timer.is_running() && !self.quit_armed {
            self.quit_armed = true;
            self.warn("Timer is still running. Stop it first, or press q again to quit without logging.");
            return;
        }
        self.should_quit = true;
    }
}

/// Run the dashboard until the user quits
pub fn run(store: RecordStore, cfg: &Config) -> AppResult<()> {
    let mut app = App::new(store, cfg);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if anything panics while in raw mode
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> AppResult<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // a timeout just falls through to the next draw, refreshing the label
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
