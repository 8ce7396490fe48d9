use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::domain::file_tree::ItemKind;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, Pane};

/// Handles key input while the explorer panel has focus.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('?') => {
            app.mode = AppMode::Help {
                context: Pane::Explorer,
                scroll_offset: 0,
            };
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('/') => app.mode = AppMode::Search,
        KeyCode::Char('n') => app.begin_create_item(ItemKind::File, false),
        KeyCode::Char('N') => app.begin_create_item(ItemKind::Folder, false),
        KeyCode::Char('a') => app.begin_create_item(ItemKind::File, true),
        KeyCode::Tab => app.mode = AppMode::Editor,
        KeyCode::Char('`') => app.toggle_terminal(),
        KeyCode::Esc if app.explorer.is_filtered() => {
            app.explorer.search.take_text();
            app.refresh_selection();
        }
        _ => {}
    }

    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::domain::input::InputState;
    use crate::runtime::mode::test_support::{key, new_test_app};

    #[test]
    fn test_handle_q_quits() {
        // Arrange
        let mut app = new_test_app();

        // Act
        let result = handle(&mut app, key(KeyCode::Char('q')));

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[test]
    fn test_handle_j_and_k_move_selection() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('j')));
        handle(&mut app, key(KeyCode::Down));
        handle(&mut app, key(KeyCode::Char('k')));

        // Assert
        assert_eq!(app.explorer.selected_index, 1);
        assert_eq!(
            app.selected_node().map(|node| node.name),
            Some("public".to_string())
        );
    }

    #[test]
    fn test_handle_shift_n_opens_folder_dialog() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT),
        );

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::CreateItem {
                kind: ItemKind::Folder,
                ..
            }
        ));
    }

    #[test]
    fn test_handle_a_targets_root_even_with_folder_selected() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('a')));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::CreateItem {
                kind: ItemKind::File,
                parent_id: None,
                ..
            }
        ));
    }

    #[test]
    fn test_handle_slash_focuses_search() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('/')));

        // Assert
        assert!(matches!(app.mode, AppMode::Search));
    }

    #[test]
    fn test_handle_escape_clears_active_filter() {
        // Arrange
        let mut app = new_test_app();
        app.explorer.search = InputState::with_text("css");

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(!app.explorer.is_filtered());
        assert!(matches!(app.mode, AppMode::Explorer));
    }

    #[test]
    fn test_handle_backtick_opens_terminal() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('`')));

        // Assert
        assert!(app.terminal.is_open());
        assert!(matches!(app.mode, AppMode::Terminal));
    }

    #[test]
    fn test_handle_question_mark_opens_explorer_help() {
        // Arrange
        let mut app = new_test_app();

        // Act
        handle(&mut app, key(KeyCode::Char('?')));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::Help {
                context: Pane::Explorer,
                scroll_offset: 0,
            }
        ));
    }
}
