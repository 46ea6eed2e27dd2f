use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tempfile::TempDir;
use timeloom::config::Config;
use timeloom::core::Timer;
use timeloom::store::RecordStore;
use timeloom::tui::App;
use timeloom::tui::app::{Mode, Tone, View};
use timeloom::tui::input::handle_key;
use timeloom::tui::render::render;
use timeloom::tui::theme::ThemeKind;

mod common;
use common::{ManualClock, sample_entries};

const TERM_W: u16 = 120;
const TERM_H: u16 = 30;

fn test_config(dir: &TempDir) -> Config {
    Config {
        data_file: dir.path().join("data.json").to_string_lossy().to_string(),
        export_file: dir
            .path()
            .join("export.csv")
            .to_string_lossy()
            .to_string(),
        ..Config::default()
    }
}

fn app_with(dir: &TempDir, seeded: bool) -> App<ManualClock> {
    let cfg = test_config(dir);
    let store = RecordStore::new(cfg.data_path());
    if seeded {
        store.save(&sample_entries()).expect("seed store");
    }
    let timer = Timer::with_clock(ManualClock::at("2025-09-03 10:00:00"));
    App::with_timer(store, timer, &cfg)
}

fn press(app: &mut App<ManualClock>, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<ManualClock>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill both inputs through the edit mode, as a user would.
fn fill_inputs(app: &mut App<ManualClock>, task: &str, category: &str) {
    press(app, KeyCode::Tab);
    type_text(app, task);
    press(app, KeyCode::Tab);
    type_text(app, category);
    press(app, KeyCode::Enter);
}

fn last_message(app: &App<ManualClock>) -> (Tone, String) {
    app.messages.last().cloned().expect("at least one message")
}

/// Render into an in-memory buffer and return plain text (no styles).
fn render_to_string(app: &App<ManualClock>) -> String {
    let backend = TestBackend::new(TERM_W, TERM_H);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    buf.content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn start_requires_task_and_category() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    press(&mut app, KeyCode::Char('s'));

    assert!(!app.timer.is_running());
    assert_eq!(
        last_message(&app),
        (Tone::Warning, "Please enter both task and category.".to_string())
    );
}

#[test]
fn start_and_stop_logs_an_entry() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    fill_inputs(&mut app, "Deep work", "Focus");
    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.task_input, "Deep work");
    assert_eq!(app.category_input, "Focus");

    press(&mut app, KeyCode::Char('s'));
    assert!(app.timer.is_running());
    assert!(last_message(&app).1.contains("Timer started for task 'Deep work'"));

    app.timer.clock().advance_secs(125);
    assert_eq!(app.timer_label(), "Timer: 00:02:05");

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.timer.is_running());
    assert!(last_message(&app).1.contains("(2.08 mins)"));

    let entries = app.store.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].task, "Deep work");
    assert_eq!(entries[0].category, "Focus");
    assert_eq!(entries[0].duration_mins, Some(2.08));
}

#[test]
fn stop_without_timer_warns() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    press(&mut app, KeyCode::Char('x'));

    assert_eq!(
        last_message(&app),
        (Tone::Warning, "Timer not running.".to_string())
    );
    assert!(app.store.load().is_empty());
}

#[test]
fn second_start_keeps_first_timer() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    fill_inputs(&mut app, "First", "Work");
    press(&mut app, KeyCode::Char('s'));

    // clear the task field and type a new one
    press(&mut app, KeyCode::Tab);
    for _ in 0.."First".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Second");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('s'));

    let (tone, msg) = last_message(&app);
    assert_eq!(tone, Tone::Warning);
    assert!(msg.contains("already running for task 'First'"));
    assert_eq!(app.timer.current().map(|e| e.task.as_str()), Some("First"));
}

#[test]
fn theme_toggles_between_light_and_dark() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);
    assert_eq!(app.theme_kind, ThemeKind::Light);

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme_kind, ThemeKind::Dark);
    assert!(last_message(&app).1.contains("Switched to Dark Mode."));

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme_kind, ThemeKind::Light);
}

#[test]
fn delete_prompt_removes_entry() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, true);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.mode, Mode::Delete);
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.view, View::Entries);
    assert_eq!(last_message(&app).1, "Entry deleted successfully!");

    let entries = app.store.load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].task, "Emails");
}

#[test]
fn delete_prompt_rejects_bad_numbers() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, true);

    press(&mut app, KeyCode::Char('d'));
    type_text(&mut app, "9");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        last_message(&app),
        (Tone::Warning, "Invalid entry number.".to_string())
    );

    press(&mut app, KeyCode::Char('d'));
    type_text(&mut app, "-1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        last_message(&app),
        (Tone::Warning, "Please enter a non-negative integer.".to_string())
    );

    // letters are ignored while typing the number, Esc cancels
    press(&mut app, KeyCode::Char('d'));
    type_text(&mut app, "x0");
    assert_eq!(app.delete_input, "0");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.store.load().len(), 3);
}

#[test]
fn export_writes_configured_csv() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, true);

    press(&mut app, KeyCode::Char('e'));

    assert!(last_message(&app).1.contains("Data exported to"));
    let content = std::fs::read_to_string(dir.path().join("export.csv")).unwrap();
    assert!(content.starts_with("Task,Category,Start,End,Duration (mins)"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn export_with_no_data_warns() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    press(&mut app, KeyCode::Char('e'));

    assert_eq!(
        last_message(&app),
        (Tone::Warning, "No data to export.".to_string())
    );
    assert!(!dir.path().join("export.csv").exists());
}

#[test]
fn quit_while_running_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);
    fill_inputs(&mut app, "Deep work", "Focus");
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert!(app.quit_armed);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
    assert!(app.store.load().is_empty());
}

#[test]
fn quit_when_idle_is_immediate() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_edit_mode() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);
    press(&mut app, KeyCode::Tab);

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_while_running_asks_first() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);
    fill_inputs(&mut app, "Deep work", "Focus");
    press(&mut app, KeyCode::Char('s'));

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    handle_key(&mut app, ctrl_c);
    assert!(!app.should_quit);
    assert_eq!(last_message(&app).0, Tone::Warning);
    assert!(last_message(&app).1.contains("Timer is still running"));

    handle_key(&mut app, ctrl_c);
    assert!(app.should_quit);
}

#[test]
fn render_shows_header_and_idle_timer() {
    let dir = TempDir::new().unwrap();
    let app = app_with(&dir, false);

    let screen = render_to_string(&app);
    assert!(screen.contains("TimeLoom"));
    assert!(screen.contains("Timer: 00:00:00"));
    assert!(screen.contains("Task:"));
    assert!(screen.contains("Category:"));
    assert!(screen.contains("[s]"));
}

#[test]
fn render_views_with_data() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, true);

    press(&mut app, KeyCode::Char('v'));
    let screen = render_to_string(&app);
    assert!(screen.contains("0. Write report (Work) - 90 mins"));
    assert!(screen.contains("2. Emails (Work) - 30 mins"));

    press(&mut app, KeyCode::Char('c'));
    let screen = render_to_string(&app);
    assert!(screen.contains("Work: 120 mins"));
    assert!(screen.contains("Study: 45 mins"));

    press(&mut app, KeyCode::Char('h'));
    let screen = render_to_string(&app);
    assert!(screen.contains("Weekly Heatmap"));
}

#[test]
fn render_views_without_data() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, false);

    press(&mut app, KeyCode::Char('v'));
    assert!(render_to_string(&app).contains("No records found."));

    press(&mut app, KeyCode::Char('c'));
    assert!(render_to_string(&app).contains("No records to summarize."));

    press(&mut app, KeyCode::Char('b'));
    assert!(render_to_string(&app).contains("No data available to display chart."));

    press(&mut app, KeyCode::Char('h'));
    assert!(render_to_string(&app).contains("No data to display heatmap."));
}

#[test]
fn render_delete_prompt_in_status_row() {
    let dir = TempDir::new().unwrap();
    let mut app = app_with(&dir, true);

    press(&mut app, KeyCode::Char('d'));
    type_text(&mut app, "2");

    assert!(render_to_string(&app).contains("Enter entry number to delete: 2"));
}
