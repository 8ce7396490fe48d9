use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::components::editor_view::EditorView;
use crate::ui::components::file_tree::FileTreePanel;
use crate::ui::components::tabs::Tabs;
use crate::ui::components::terminal_panel::TerminalPanel;
use crate::ui::state::app_mode::{AppMode, Pane};
use crate::ui::{Component, Page, RenderContext};

const EXPLORER_WIDTH: u16 = 32;
const TERMINAL_HEIGHT: u16 = 12;
const TAB_STRIP_HEIGHT: u16 = 1;

/// Editor screen: explorer on the left, tabs and editor body on the right,
/// and the terminal under the editor when it is open.
pub struct EditorPage<'a, 'b> {
    context: &'b RenderContext<'a>,
}

impl<'a, 'b> EditorPage<'a, 'b> {
    pub fn new(context: &'b RenderContext<'a>) -> Self {
        Self { context }
    }
}

impl Page for EditorPage<'_, '_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let context = self.context;
        let pane = context.mode.pane();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(EXPLORER_WIDTH), Constraint::Min(0)])
            .split(area);

        FileTreePanel::new(
            context.tree,
            context.expansion,
            context.explorer,
            pane == Pane::Explorer,
            matches!(context.mode, AppMode::Search),
        )
        .render(f, columns[0]);

        let terminal_height = if context.terminal.is_open() {
            TERMINAL_HEIGHT
        } else {
            0
        };
        let rows = Layout::default()
            .constraints([
                Constraint::Length(TAB_STRIP_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(terminal_height),
            ])
            .split(columns[1]);

        Tabs::new(context.open_files).render(f, rows[0]);
        EditorView::new(
            context.editor,
            context.open_files.active_name(),
            context.collaborators,
            matches!(context.mode, AppMode::Editor),
        )
        .render(f, rows[1]);

        if context.terminal.is_open() {
            TerminalPanel::new(context.terminal, matches!(context.mode, AppMode::Terminal))
                .render(f, rows[2]);
        }
    }
}
