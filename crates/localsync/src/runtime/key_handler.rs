use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::Explorer => mode::explorer::handle(app, key),
        AppMode::Search => mode::search::handle(app, key),
        AppMode::Editor => mode::editor::handle(app, key),
        AppMode::Terminal => mode::terminal::handle(app, key),
        AppMode::CreateItem { .. } => mode::create_item::handle(app, key),
        AppMode::Notice { .. } => mode::notice::handle(app, key),
        AppMode::Help { .. } => mode::help::handle(app, key),
    }
}
