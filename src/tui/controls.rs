//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    // Shift scales arrow keys only.
    let big = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Char('+' | '=') => app.nudge(1),
        KeyCode::Char('-' | '_') => app.nudge(-1),
        KeyCode::Right => app.nudge(if big { 10 } else { 1 }),
        KeyCode::Left => app.nudge(if big { -10 } else { -1 }),
        KeyCode::Char('1') => app.load_preset("reference"),
        KeyCode::Char('2') => app.load_preset("lean_gas"),
        KeyCode::Char('3') => app.load_preset("hot_outlet"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
