use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::dashboard::Effect;
use crate::ui::app::{App, Focus};

/// Map a key press to app updates; returns effects to execute.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Vec<Effect> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return Vec::new();
    }

    if app.dashboard().match_dialog().is_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m')) {
            app.close_match();
        }
        return Vec::new();
    }

    if app.focus() == Focus::Search {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => app.set_focus(Focus::Grid),
            KeyCode::Backspace => app.pop_search_char(now),
            KeyCode::Char(ch) => app.push_search_char(ch, now),
            _ => {}
        }
        return Vec::new();
    }

    if is_ctrl_char(key, 'r') {
        return app.reload_config(now);
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Up | KeyCode::Char('k') => app.move_row(-1, now),
        KeyCode::Down | KeyCode::Char('j') => app.move_row(1, now),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, now),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, now),
        KeyCode::PageUp => app.page(-1, now),
        KeyCode::PageDown => app.page(1, now),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(now),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current(),
        KeyCode::Char('c') => app.dashboard_mut().clear_selection(),
        KeyCode::Char('m') => return app.open_match(),
        KeyCode::Char('r') => return app.retry_fetch(),
        _ => {}
    }
    Vec::new()
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(1, now),
        MouseEventKind::ScrollUp => app.scroll_by(-1, now),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
