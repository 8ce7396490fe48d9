use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::runtime::mode::text_input;
use crate::ui::state::app_mode::{AppMode, Pane};

/// Handles key input while the editor body has focus.
///
/// Every edit is written back to the active tab right away.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    if key.modifiers.contains(KeyModifiers::ALT)
        && let KeyCode::Char(digit @ '1'..='9') = key.code
    {
        if let Some(position) = digit.to_digit(10).and_then(|value| usize::try_from(value).ok()) {
            app.switch_tab_at(position - 1);
        }

        return EventResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        handle_chord(app, key);

        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Esc => {
            app.mode = AppMode::Explorer;

            return EventResult::Continue;
        }
        KeyCode::F(1) => {
            app.mode = AppMode::Help {
                context: Pane::Editor,
                scroll_offset: 0,
            };

            return EventResult::Continue;
        }
        _ => {}
    }

    if text_input::handle_text_key(&mut app.editor, key) {
        app.sync_editor();
    }

    EventResult::Continue
}

fn handle_chord(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') => {
            if let Err(error) = app.close_active_tab() {
                app.show_close_error(&error);
            }
        }
        KeyCode::Char('n') => app.cycle_tab(1),
        KeyCode::Char('p') => app.cycle_tab(-1),
        KeyCode::Char('s') => app.save_active(),
        KeyCode::Char('r') => app.run_project(),
        KeyCode::Char('t') => app.toggle_terminal(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::file_tree::FileNode;
    use crate::domain::language::REACT_STARTER;
    use crate::runtime::mode::test_support::{ctrl, key, new_test_app, type_text};

    fn editor_app() -> App {
        let mut app = new_test_app();
        app.mode = AppMode::Editor;

        app
    }

    #[test]
    fn test_typing_writes_back_to_active_file() {
        // Arrange
        let mut app = editor_app();

        // Act
        type_text(&mut app, "// hi");
        handle(&mut app, key(KeyCode::Enter));

        // Assert
        let expected = format!("// hi\n{REACT_STARTER}");
        assert_eq!(app.open_files().content("App.tsx"), Some(expected.as_str()));
    }

    #[test]
    fn test_ctrl_w_on_last_tab_shows_notice() {
        // Arrange
        let mut app = editor_app();

        // Act
        handle(&mut app, ctrl('w'));

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::Notice {
                ref title,
                return_to: Pane::Editor,
                ..
            } if title == "Cannot close file"
        ));
        assert_eq!(app.open_files().len(), 1);
    }

    #[test]
    fn test_ctrl_w_closes_active_tab() {
        // Arrange
        let mut app = editor_app();
        app.open_file(&FileNode::file("notes.md", None));

        // Act
        handle(&mut app, ctrl('w'));

        // Assert
        assert!(matches!(app.mode, AppMode::Editor));
        assert!(!app.open_files().contains("notes.md"));
    }

    #[test]
    fn test_ctrl_n_and_ctrl_p_cycle_tabs() {
        // Arrange
        let mut app = editor_app();
        app.open_file(&FileNode::file("a.md", None));
        app.open_file(&FileNode::file("b.md", None));

        // Act
        handle(&mut app, ctrl('n'));
        let after_next = app.open_files().active_name().to_string();
        handle(&mut app, ctrl('p'));

        // Assert
        assert_eq!(after_next, "App.tsx");
        assert_eq!(app.open_files().active_name(), "b.md");
    }

    #[test]
    fn test_alt_digit_jumps_to_tab_by_position() {
        // Arrange
        let mut app = editor_app();
        app.open_file(&FileNode::file("a.md", Some("alpha".to_string())));
        app.open_file(&FileNode::file("b.md", None));

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));

        // Assert
        assert_eq!(app.open_files().active_name(), "a.md");
        assert_eq!(app.editor.text(), "alpha");
        assert!(app.open_files().contains("b.md"));
    }

    #[test]
    fn test_alt_digit_past_last_tab_changes_nothing() {
        // Arrange
        let mut app = editor_app();

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Char('9'), KeyModifiers::ALT));

        // Assert
        assert_eq!(app.open_files().active_name(), "App.tsx");
        assert_eq!(app.editor.text(), REACT_STARTER);
    }

    #[test]
    fn test_ctrl_s_reports_saved_file() {
        // Arrange
        let mut app = editor_app();

        // Act
        handle(&mut app, ctrl('s'));

        // Assert
        assert!(
            app.status_message()
                .is_some_and(|message| message.starts_with("Changes saved"))
        );
    }

    #[test]
    fn test_escape_returns_to_explorer() {
        // Arrange
        let mut app = editor_app();

        // Act
        handle(&mut app, key(KeyCode::Esc));

        // Assert
        assert!(matches!(app.mode, AppMode::Explorer));
    }
}
