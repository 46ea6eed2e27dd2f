use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::utils::clock::Clock;

use super::app::{App, Field, Mode, View};

/// Route a key press according to the current mode
pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit(field) => handle_edit(app, field, key),
        Mode::Delete => handle_delete(app, key),
    }
}

fn handle_navigate<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if !matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.quit_armed = false;
    }

    match key.code {
        KeyCode::Char('s') => app.start_timer(),
        KeyCode::Char('x') => app.stop_timer(),
        KeyCode::Char('v') => app.show(View::Entries),
        KeyCode::Char('c') => app.show(View::Summary),
        KeyCode::Char('b') => app.show(View::Chart),
        KeyCode::Char('h') => app.show(View::Heatmap),
        KeyCode::Char('l') => app.show(View::Log),
        KeyCode::Char('d') => app.begin_delete(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('e') => app.export_csv(),
        KeyCode::Tab | KeyCode::Char('i') => app.mode = Mode::Edit(Field::Task),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_edit<C: Clock>(app: &mut App<C>, field: Field, key: KeyEvent) {
    let buffer = match field {
        Field::Task => &mut app.task_input,
        Field::Category => &mut app.category_input,
    };

    match key.code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.mode = Mode::Edit(match field {
                Field::Task => Field::Category,
                Field::Category => Field::Task,
            });
        }
        KeyCode::Enter | KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {}
    }
}

fn handle_delete<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => app.delete_input.push(c),
        KeyCode::Backspace => {
            app.delete_input.pop();
        }
        KeyCode::Enter => app.confirm_delete(),
        KeyCode::Esc => {
            app.delete_input.clear();
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
