use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::file_tree::ItemKind;
use crate::runtime::EventResult;
use crate::runtime::mode::text_input;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the new file/folder dialog is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            let return_to = app.mode.pane();
            app.mode = return_to.restore_mode();
        }
        KeyCode::Enter => submit(app),
        _ => {
            if let AppMode::CreateItem { input, .. } = &mut app.mode {
                text_input::handle_line_key(input, key);
            }
        }
    }

    EventResult::Continue
}

fn submit(app: &mut App) {
    match std::mem::replace(&mut app.mode, AppMode::Explorer) {
        AppMode::CreateItem {
            input,
            kind,
            parent_id,
            return_to,
        } => {
            app.mode = return_to.restore_mode();
            match app.create_item(kind, parent_id.as_ref(), input.text()) {
                Ok(_) if kind == ItemKind::File => app.mode = AppMode::Editor,
                Ok(_) => app.refresh_selection(),
                Err(error) => app.show_create_error(&error),
            }
        }
        other => app.mode = other,
    }
}
