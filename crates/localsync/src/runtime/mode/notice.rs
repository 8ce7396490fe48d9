use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;

/// Handles key input while a notice overlay is shown.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'q')
    ) {
        let return_to = app.mode.pane();
        app.mode = return_to.restore_mode();
    }

    EventResult::Continue
}
