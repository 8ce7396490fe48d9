//! App-layer composition root owning the editor screen state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::file_tree::{
    ExpansionState, FileNode, FileTree, InsertOutcome, ItemKind, NodeId,
};
use crate::domain::input::InputState;
use crate::domain::open_files::{OpenFileError, OpenFileSet};
use crate::domain::presence::Collaborator;
use crate::domain::terminal::TerminalSession;
use crate::infra::seed::WorkspaceSeed;
use crate::ui::state::app_mode::AppMode;

pub mod explorer;
pub mod presence;

pub use explorer::ExplorerState;
pub use presence::{PresenceTask, SharedCollaborators};

/// Directory under the user's home holding the log file.
pub const LOCALSYNC_DIR: &str = ".localsync";
/// Address the simulated run action reports.
pub const PREVIEW_URL: &str = "https://LocalSync.dev/preview/your-project";

const CANNOT_CLOSE_TITLE: &str = "Cannot close file";
const CREATE_ERROR_TITLE: &str = "Error";

/// Returns the `localsync` home directory, `~/.localsync`.
pub fn localsync_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(LOCALSYNC_DIR);
    }

    PathBuf::from(LOCALSYNC_DIR)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateItemError {
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Editor screen state: the project tree, open tabs, terminal and overlays.
pub struct App {
    pub editor: InputState,
    pub explorer: ExplorerState,
    pub mode: AppMode,
    pub terminal: TerminalSession,
    collaborators: SharedCollaborators,
    expansion: ExpansionState,
    open_files: OpenFileSet,
    status_message: Option<String>,
    tree: FileTree,
}

impl App {
    /// Builds the editor screen from seed data.
    pub fn new(seed: WorkspaceSeed) -> Self {
        let WorkspaceSeed {
            collaborators,
            default_file,
            files,
        } = seed;
        let expansion = ExpansionState::from_roots(&files);
        let open_files = OpenFileSet::new(default_file.name, default_file.content);
        let mut editor = InputState::with_text(open_files.active_content());
        editor.cursor = 0;

        Self {
            editor,
            explorer: ExplorerState::default(),
            mode: AppMode::Explorer,
            terminal: TerminalSession::new(),
            collaborators: Arc::new(Mutex::new(collaborators)),
            expansion,
            open_files,
            status_message: None,
            tree: FileTree::new(files),
        }
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn open_files(&self) -> &OpenFileSet {
        &self.open_files
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Returns a handle to the collaborator list shared with the presence
    /// task.
    pub fn collaborators(&self) -> SharedCollaborators {
        Arc::clone(&self.collaborators)
    }

    /// Copies the current collaborator list, or nothing when the lock is
    /// poisoned.
    pub fn collaborator_snapshot(&self) -> Vec<Collaborator> {
        self.collaborators
            .lock()
            .map(|collaborators| collaborators.clone())
            .unwrap_or_default()
    }

    pub fn selected_node(&self) -> Option<FileNode> {
        self.explorer.selected_node(&self.tree, &self.expansion)
    }

    pub fn select_next(&mut self) {
        let row_count = self.row_count();
        self.explorer.select_next(row_count);
    }

    pub fn select_previous(&mut self) {
        self.explorer.select_previous();
    }

    /// Keeps the selection inside the listing after the query or expansion
    /// changed.
    pub fn refresh_selection(&mut self) {
        let row_count = self.row_count();
        self.explorer.clamp_selection(row_count);
    }

    /// Toggles the selected folder or opens the selected file.
    pub fn activate_selected(&mut self) {
        let Some(node) = self.selected_node() else {
            return;
        };

        if node.is_folder() {
            self.toggle_folder(&node.id);
        } else {
            self.open_file(&node);
            self.mode = AppMode::Editor;
        }
    }

    pub fn toggle_folder(&mut self, id: &NodeId) {
        self.expansion.toggle(&self.tree, id);
        debug!(folder = %id, expanded = self.expansion.is_expanded(id), "toggled folder");
        self.refresh_selection();
    }

    /// Opens `node` in a tab and loads it into the editor body.
    pub fn open_file(&mut self, node: &FileNode) {
        self.open_files.open_file(node);
        info!(file = %node.name, "opened file");
        self.load_active_file();
    }

    /// Opens the new-item dialog.
    ///
    /// The item goes under the selected folder, or at the root when
    /// `at_root` is set or the selection is not a folder.
    pub fn begin_create_item(&mut self, kind: ItemKind, at_root: bool) {
        let parent_id = if at_root {
            None
        } else {
            self.selected_node()
                .filter(FileNode::is_folder)
                .map(|node| node.id)
        };

        self.mode = AppMode::CreateItem {
            input: InputState::new(),
            kind,
            parent_id,
            return_to: self.mode.pane(),
        };
    }

    /// Adds a new file or folder named `name` under `parent_id`.
    ///
    /// New folders start expanded and new files are opened in the editor.
    /// A parent that no longer exists drops the item silently.
    ///
    /// # Errors
    /// Returns [`CreateItemError::EmptyName`] when `name` is blank.
    pub fn create_item(
        &mut self,
        kind: ItemKind,
        parent_id: Option<&NodeId>,
        name: &str,
    ) -> Result<NodeId, CreateItemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreateItemError::EmptyName);
        }

        let node = FileNode::new_item(kind, name);
        let id = node.id.clone();

        match self.tree.insert(parent_id, node.clone()) {
            InsertOutcome::Inserted { expand } => {
                if let Some(parent_id) = expand {
                    self.expansion.set_expanded(parent_id, true);
                }
                info!(kind = kind.label(), name, "created item");
            }
            InsertOutcome::Dropped => {
                debug!(kind = kind.label(), name, "dropped item with unknown parent");
            }
        }

        match kind {
            ItemKind::Folder => self.expansion.set_expanded(id.clone(), true),
            ItemKind::File => self.open_file(&node),
        }

        let title = match kind {
            ItemKind::File => "File created",
            ItemKind::Folder => "Folder created",
        };
        self.status_message = Some(format!("{title}: {name} has been created successfully."));

        Ok(id)
    }

    /// Writes the editor body back into the active tab.
    pub fn sync_editor(&mut self) {
        self.open_files.edit_active(self.editor.text().to_string());
    }

    /// Focuses the tab `offset` positions away from the active one.
    pub fn cycle_tab(&mut self, offset: isize) {
        self.open_files.cycle(offset);
        self.load_active_file();
    }

    /// Focuses the tab at `index` in tab order. Indexes past the last tab
    /// leave focus alone.
    pub fn switch_tab_at(&mut self, index: usize) {
        let Some(name) = self.open_files.names().nth(index).map(str::to_string) else {
            return;
        };

        self.open_files.switch_to(&name);
        self.load_active_file();
    }

    /// Closes the active tab.
    ///
    /// # Errors
    /// Returns [`OpenFileError::CannotCloseLastFile`] when it is the only tab.
    pub fn close_active_tab(&mut self) -> Result<(), OpenFileError> {
        let name = self.open_files.active_name().to_string();
        if let Err(error) = self.open_files.close_file(&name) {
            warn!(file = %name, "refused to close the last open file");

            return Err(error);
        }

        info!(file = %name, "closed file");
        self.load_active_file();

        Ok(())
    }

    /// Reports the active file as saved. Nothing is written to disk.
    pub fn save_active(&mut self) {
        let name = self.open_files.active_name();
        info!(file = %name, "saved file");
        self.status_message = Some(format!(
            "Changes saved: {name} has been saved successfully."
        ));
    }

    /// Reports the project as running. Nothing is executed.
    pub fn run_project(&mut self) {
        info!("started project preview");
        self.status_message = Some(format!(
            "Project running: Your project is now running at {PREVIEW_URL}"
        ));
    }

    /// Shows or hides the terminal panel, moving focus along with it.
    pub fn toggle_terminal(&mut self) {
        self.terminal.toggle_open();

        if self.terminal.is_open() {
            self.mode = AppMode::Terminal;
        } else if matches!(self.mode, AppMode::Terminal) {
            self.mode = AppMode::Editor;
        }
    }

    /// Runs the terminal input line.
    pub fn submit_terminal_command(&mut self) {
        let Some(command) = self.terminal.submit() else {
            return;
        };
        info!(command = %command, "ran terminal command");

        if !self.terminal.is_open() {
            self.mode = AppMode::Editor;
        }
    }

    /// Replaces the current mode with a blocking notice.
    pub fn show_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.mode = AppMode::Notice {
            message: message.into(),
            return_to: self.mode.pane(),
            title: title.into(),
        };
    }

    /// Shows the notice for a failed tab close.
    pub fn show_close_error(&mut self, error: &OpenFileError) {
        self.show_notice(CANNOT_CLOSE_TITLE, error.to_string());
    }

    /// Shows the notice for a rejected new-item name.
    pub fn show_create_error(&mut self, error: &CreateItemError) {
        self.show_notice(CREATE_ERROR_TITLE, error.to_string());
    }

    fn row_count(&self) -> usize {
        self.explorer.row_count(&self.tree, &self.expansion)
    }

    fn load_active_file(&mut self) {
        self.editor = InputState::with_text(self.open_files.active_content());
        self.editor.cursor = 0;
    }
}
