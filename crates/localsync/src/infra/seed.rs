use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::file_tree::FileNode;
use crate::domain::language::{CSS_STARTER, NODE_STARTER, REACT_STARTER};
use crate::domain::presence::{Collaborator, default_collaborators};

/// Name of the file open in the editor when nothing else is configured.
pub const DEFAULT_FILE_NAME: &str = "App.tsx";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read workspace seed `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid workspace seed `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File that starts out open in the editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl Default for SeedFile {
    fn default() -> Self {
        Self {
            name: DEFAULT_FILE_NAME.to_string(),
            content: REACT_STARTER.to_string(),
        }
    }
}

/// Mock workspace data injected into the app at start-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSeed {
    #[serde(default = "default_collaborators")]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub default_file: SeedFile,
    #[serde(default = "builtin_files")]
    pub files: Vec<FileNode>,
}

impl Default for WorkspaceSeed {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WorkspaceSeed {
    /// Returns the sample React/Node project shipped with the app.
    pub fn builtin() -> Self {
        Self {
            collaborators: default_collaborators(),
            default_file: SeedFile::default(),
            files: builtin_files(),
        }
    }

    /// Reads a JSON seed fixture from `path`.
    ///
    /// # Errors
    /// Returns [`SeedError::Read`] when the file cannot be read and
    /// [`SeedError::Parse`] when it is not a valid seed document.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn builtin_files() -> Vec<FileNode> {
    let file = |id: &str, name: &str| FileNode::file(name, None).with_id(id);
    let file_with = |id: &str, name: &str, content: &str| {
        FileNode::file(name, Some(content.to_string())).with_id(id)
    };

    vec![
        FileNode::folder("node_modules")
            .with_id("1")
            .with_expanded(false),
        FileNode::folder("public")
            .with_id("2")
            .with_children(vec![file("2-1", "favicon.ico"), file("2-2", "robots.txt")]),
        FileNode::folder("src").with_id("3").with_children(vec![
            FileNode::folder("components")
                .with_id("3-1")
                .with_children(vec![
                    file_with("3-1-1", "Button.tsx", REACT_STARTER),
                    file("3-1-2", "Input.tsx"),
                    file("3-1-3", "Card.tsx"),
                ]),
            FileNode::folder("utils").with_id("3-2").with_expanded(false),
            file_with("3-3", "App.tsx", REACT_STARTER),
            file("3-4", "index.tsx"),
            file_with("3-5", "styles.css", CSS_STARTER),
        ]),
        file_with("4", "server.js", NODE_STARTER),
        file("5", "package.json"),
        file("6", "README.md"),
    ]
}
