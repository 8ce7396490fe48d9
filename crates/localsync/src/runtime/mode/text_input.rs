use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::input::InputState;

/// Applies a single-line editing key to `input`.
///
/// Returns `false` when the key is not an editing key, so the caller can
/// treat it as a command instead.
pub(crate) fn handle_line_key(input: &mut InputState, key: KeyEvent) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    match key.code {
        KeyCode::Char(ch) => input.insert_char(ch),
        KeyCode::Backspace => input.delete_backward(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_line_start(),
        KeyCode::End => input.move_line_end(),
        _ => return false,
    }

    true
}

/// Applies a multi-line editing key to `input`, including newlines,
/// indentation and vertical movement.
pub(crate) fn handle_text_key(input: &mut InputState, key: KeyEvent) -> bool {
    if handle_line_key(input, key) {
        return true;
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    match key.code {
        KeyCode::Enter => input.insert_newline(),
        KeyCode::Tab => input.insert_tab(),
        KeyCode::Up => input.move_up(),
        KeyCode::Down => input.move_down(),
        _ => return false,
    }

    true
}
