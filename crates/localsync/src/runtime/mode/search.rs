use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::text_input;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the explorer search box has focus.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.explorer.search.take_text();
            app.refresh_selection();
            app.mode = AppMode::Explorer;
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            app.mode = AppMode::Explorer;
        }
        _ => {
            if text_input::handle_line_key(&mut app.explorer.search, key) {
                app.explorer.selected_index = 0;
            }
        }
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::mode::test_support::{key, new_test_app, type_text};

    #[test]
    fn test_typing_filters_explorer_rows() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Search;

        // Act
        type_text(&mut app, "readme");

        // Assert
        assert_eq!(app.explorer.query(), "readme");
        assert_eq!(
            app.selected_node().map(|node| node.name),
            Some("README.md".to_string())
        );
    }

    #[test]
    fn test_enter_keeps_filter_and_returns_to_explorer() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Search;
        type_text(&mut app, "src");

        // Act
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        assert!(matches!(app.mode, AppMode::Explorer));
        assert!(app.explorer.is_filtered());
    }

    #[test]
    fn test_escape_clears_filter() {
        // Arrange
        let mut app = new_test_app();
        app.mode = AppMode::Search;
        type_text(&mut app, "src");

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(matches!(app.mode, AppMode::Explorer));
        assert_eq!(app.explorer.query(), "");
    }
}
