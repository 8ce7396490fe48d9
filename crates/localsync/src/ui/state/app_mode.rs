use crate::domain::file_tree::{ItemKind, NodeId};
use crate::domain::input::InputState;

pub enum AppMode {
    Explorer,
    /// The explorer search box has focus.
    Search,
    Editor,
    Terminal,
    CreateItem {
        input: InputState,
        kind: ItemKind,
        parent_id: Option<NodeId>,
        return_to: Pane,
    },
    /// Blocking message that must be dismissed before anything else happens.
    Notice {
        message: String,
        return_to: Pane,
        title: String,
    },
    Help {
        context: Pane,
        scroll_offset: u16,
    },
}

impl AppMode {
    /// Pane that owns keyboard focus, looking through overlays.
    pub fn pane(&self) -> Pane {
        match self {
            AppMode::Explorer | AppMode::Search => Pane::Explorer,
            AppMode::Editor => Pane::Editor,
            AppMode::Terminal => Pane::Terminal,
            AppMode::CreateItem { return_to, .. } | AppMode::Notice { return_to, .. } => *return_to,
            AppMode::Help { context, .. } => *context,
        }
    }
}

/// One of the three panels of the editor screen.
///
/// Overlays remember the pane that opened them so it can be restored on
/// close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Explorer,
    Editor,
    Terminal,
}

impl Pane {
    /// Returns the keybinding pairs `(key, description)` for this pane.
    pub fn keybindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pane::Explorer => &[
                ("j / k", "Select row"),
                ("Enter", "Toggle folder / open file"),
                ("/", "Search files"),
                ("n", "New file in selected folder"),
                ("N", "New folder in selected folder"),
                ("a", "New file at root"),
                ("Tab", "Focus editor"),
                ("`", "Toggle terminal"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
            Pane::Editor => &[
                ("Esc", "Back to explorer"),
                ("Ctrl+n", "Next tab"),
                ("Ctrl+p", "Previous tab"),
                ("Alt+N", "Jump to tab N"),
                ("Ctrl+w", "Close tab"),
                ("Ctrl+s", "Save"),
                ("Ctrl+r", "Run project"),
                ("Ctrl+t", "Toggle terminal"),
                ("F1", "Help"),
            ],
            Pane::Terminal => &[
                ("Enter", "Run command"),
                ("Esc", "Back to editor"),
                ("Ctrl+t", "Hide terminal"),
                ("F1", "Help"),
                ("help", "List commands"),
                ("exit", "Close terminal"),
            ],
        }
    }

    /// Reconstructs the `AppMode` for this pane.
    pub fn restore_mode(self) -> AppMode {
        match self {
            Pane::Explorer => AppMode::Explorer,
            Pane::Editor => AppMode::Editor,
            Pane::Terminal => AppMode::Terminal,
        }
    }

    /// Display title for the help overlay header.
    pub fn title(self) -> &'static str {
        match self {
            Pane::Explorer => "Explorer Keybindings",
            Pane::Editor => "Editor Keybindings",
            Pane::Terminal => "Terminal Keybindings",
        }
    }
}
