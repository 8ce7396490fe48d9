pub mod components;
pub mod pages;
pub mod state;
pub mod util;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::{App, ExplorerState};
use crate::domain::file_tree::{ExpansionState, FileTree};
use crate::domain::input::InputState;
use crate::domain::open_files::OpenFileSet;
use crate::domain::presence::Collaborator;
use crate::domain::terminal::TerminalSession;
use state::app_mode::AppMode;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Borrowed view of everything one frame needs.
pub struct RenderContext<'a> {
    pub collaborators: &'a [Collaborator],
    pub editor: &'a InputState,
    pub expansion: &'a ExpansionState,
    pub explorer: &'a ExplorerState,
    pub mode: &'a AppMode,
    pub open_files: &'a OpenFileSet,
    pub status_message: Option<&'a str>,
    pub terminal: &'a TerminalSession,
    pub tree: &'a FileTree,
}

impl<'a> RenderContext<'a> {
    pub fn new(app: &'a App, collaborators: &'a [Collaborator]) -> Self {
        Self {
            collaborators,
            editor: &app.editor,
            expansion: app.expansion(),
            explorer: &app.explorer,
            mode: &app.mode,
            open_files: app.open_files(),
            status_message: app.status_message(),
            terminal: &app.terminal,
            tree: app.tree(),
        }
    }
}

pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();

    // Three-section layout: top status bar, content area, footer bar
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Top status bar
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(context.mode.pane(), context.collaborators)
        .render(f, status_bar_area);
    components::footer_bar::FooterBar::new(context.mode.pane(), context.status_message)
        .render(f, footer_bar_area);

    pages::editor::EditorPage::new(&context).render(f, content_area);

    match context.mode {
        AppMode::CreateItem {
            input,
            kind,
            parent_id,
            ..
        } => {
            let parent_name = parent_id
                .as_ref()
                .and_then(|id| context.tree.find_by_id(id))
                .map(|node| node.name.as_str());
            components::create_item_overlay::CreateItemOverlay::new(input, *kind, parent_name)
                .render(f, content_area);
        }
        AppMode::Notice { title, message, .. } => {
            components::notice_overlay::NoticeOverlay::new(title, message)
                .render(f, content_area);
        }
        AppMode::Help {
            context: pane,
            scroll_offset,
        } => {
            components::help_overlay::HelpOverlay::new(*pane, *scroll_offset)
                .render(f, content_area);
        }
        AppMode::Explorer | AppMode::Search | AppMode::Editor | AppMode::Terminal => {}
    }
}
