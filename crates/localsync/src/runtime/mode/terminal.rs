use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::text_input;
use crate::ui::state::app_mode::{AppMode, Pane};

/// Handles key input while the terminal prompt has focus.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => app.mode = AppMode::Editor,
        KeyCode::Enter => app.submit_terminal_command(),
        KeyCode::F(1) => {
            app.mode = AppMode::Help {
                context: Pane::Terminal,
                scroll_offset: 0,
            };
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_terminal();
        }
        _ => {
            text_input::handle_line_key(&mut app.terminal.input, key);
        }
    }

    EventResult::Continue
}
