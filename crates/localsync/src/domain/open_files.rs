use thiserror::Error;

use super::file_tree::FileNode;
use super::language;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpenFileError {
    #[error("You need to keep at least one file open.")]
    CannotCloseLastFile,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OpenFile {
    content: String,
    name: String,
}

/// Files loaded into the editor, keyed by name, in the order they were
/// opened.
///
/// Always holds at least one file and the active name always refers to one
/// of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenFileSet {
    active_index: usize,
    files: Vec<OpenFile>,
}

impl OpenFileSet {
    /// Creates a set holding a single active file.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            active_index: 0,
            files: vec![OpenFile {
                content: content.into(),
                name: name.into(),
            }],
        }
    }

    /// Loads `file` if it is not open yet, then focuses it.
    ///
    /// Content comes from the node itself, or from the extension starter
    /// table when the node carries none. Reopening keeps the stored content.
    pub fn open_file(&mut self, file: &FileNode) -> &str {
        let index = match self.position(&file.name) {
            Some(index) => index,
            None => {
                let content = file
                    .content()
                    .unwrap_or_else(|| language::default_content(&file.name))
                    .to_string();
                self.files.push(OpenFile {
                    content,
                    name: file.name.clone(),
                });

                self.files.len() - 1
            }
        };
        self.active_index = index;

        &self.files[index].content
    }

    /// Overwrites the content of the active file.
    pub fn edit_active(&mut self, content: String) {
        if let Some(file) = self.files.get_mut(self.active_index) {
            file.content = content;
        }
    }

    /// Removes `name` from the set.
    ///
    /// Closing the active file moves focus to the first remaining file.
    /// Unknown names are ignored.
    ///
    /// # Errors
    /// Returns [`OpenFileError::CannotCloseLastFile`] when `name` would leave
    /// the set empty; nothing changes in that case.
    pub fn close_file(&mut self, name: &str) -> Result<(), OpenFileError> {
        if self.files.len() == 1 {
            return Err(OpenFileError::CannotCloseLastFile);
        }

        let Some(index) = self.position(name) else {
            return Ok(());
        };

        let active_name = self.active_name().to_string();
        self.files.remove(index);
        self.active_index = if active_name == name {
            0
        } else {
            self.position(&active_name).unwrap_or(0)
        };

        Ok(())
    }

    /// Focuses `name` and returns its content.
    ///
    /// An unknown name leaves focus where it is and yields empty content.
    pub fn switch_to(&mut self, name: &str) -> &str {
        match self.position(name) {
            Some(index) => {
                self.active_index = index;

                &self.files[index].content
            }
            None => "",
        }
    }

    /// Focuses the file `offset` tabs away from the active one, wrapping
    /// around.
    pub fn cycle(&mut self, offset: isize) -> &str {
        let len = self.files.len();
        let step = offset.unsigned_abs() % len;
        self.active_index = if offset.is_negative() {
            (self.active_index + len - step) % len
        } else {
            (self.active_index + step) % len
        };

        &self.files[self.active_index].content
    }

    pub fn active_name(&self) -> &str {
        &self.files[self.active_index].name
    }

    pub fn active_content(&self) -> &str {
        &self.files[self.active_index].content
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.position(name)
            .map(|index| self.files[index].content.as_str())
    }

    /// Returns open file names in tab order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Never `true`: a set starts with one file and refuses to close its last.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|file| file.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::{CSS_STARTER, REACT_STARTER};

    fn seeded_set() -> OpenFileSet {
        OpenFileSet::new("App.tsx", REACT_STARTER)
    }

    #[test]
    fn test_open_file_uses_explicit_content_when_present() {
        // Arrange
        let mut set = seeded_set();
        let file = FileNode::file("server.js", Some("console.log(1);".to_string()));

        // Act
        let content = set.open_file(&file).to_string();

        // Assert
        assert_eq!(content, "console.log(1);");
        assert_eq!(set.active_name(), "server.js");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_open_file_derives_css_starter_from_extension() {
        // Arrange
        let mut set = seeded_set();

        // Act
        let content = set.open_file(&FileNode::file("styles.css", None)).to_string();

        // Assert
        assert_eq!(content, CSS_STARTER);
    }

    #[test]
    fn test_open_file_unknown_extension_starts_empty() {
        // Arrange
        let mut set = seeded_set();

        // Act
        let content = set.open_file(&FileNode::file("notes.txt", None)).to_string();

        // Assert
        assert!(content.is_empty());
    }

    #[test]
    fn test_open_file_twice_only_moves_focus() {
        // Arrange
        let mut set = seeded_set();
        let file = FileNode::file("notes.txt", None);
        set.open_file(&file);
        set.edit_active("draft".to_string());
        let once = set.clone();

        // Act
        set.open_file(&file);

        // Assert
        assert_eq!(set, once);
        assert_eq!(set.content("notes.txt"), Some("draft"));
    }

    #[test]
    fn test_edit_active_overwrites_only_active_file() {
        // Arrange
        let mut set = seeded_set();
        set.open_file(&FileNode::file("notes.txt", None));

        // Act
        set.edit_active("hello".to_string());

        // Assert
        assert_eq!(set.content("notes.txt"), Some("hello"));
        assert_eq!(set.content("App.tsx"), Some(REACT_STARTER));
    }

    #[test]
    fn test_close_last_file_is_refused_and_set_unchanged() {
        // Arrange
        let mut set = seeded_set();
        let before = set.clone();

        // Act
        let result = set.close_file("App.tsx");

        // Assert
        assert_eq!(result, Err(OpenFileError::CannotCloseLastFile));
        assert_eq!(set, before);
    }

    #[test]
    fn test_close_active_file_focuses_first_remaining() {
        // Arrange
        let mut set = seeded_set();
        set.open_file(&FileNode::file("a.txt", None));
        set.open_file(&FileNode::file("b.txt", None));

        // Act
        let result = set.close_file("b.txt");

        // Assert
        assert!(result.is_ok());
        assert_eq!(set.len(), 2);
        assert_eq!(set.active_name(), "App.tsx");
    }

    #[test]
    fn test_close_every_key_keeps_active_name_valid() {
        // Arrange
        let names = ["App.tsx", "a.txt", "b.txt"];

        for closed in names {
            let mut set = seeded_set();
            set.open_file(&FileNode::file("a.txt", None));
            set.open_file(&FileNode::file("b.txt", None));
            set.switch_to("a.txt");

            // Act
            let result = set.close_file(closed);

            // Assert
            assert!(result.is_ok());
            assert_eq!(set.len(), 2);
            assert!(!set.contains(closed));
            assert!(set.contains(set.active_name()));
        }
    }

    #[test]
    fn test_close_inactive_file_keeps_focus() {
        // Arrange
        let mut set = seeded_set();
        set.open_file(&FileNode::file("a.txt", None));
        set.open_file(&FileNode::file("b.txt", None));

        // Act
        set.close_file("a.txt").expect("close should succeed");

        // Assert
        assert_eq!(set.active_name(), "b.txt");
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["App.tsx", "b.txt"]);
    }

    #[test]
    fn test_switch_to_unknown_name_returns_empty_and_keeps_focus() {
        // Arrange
        let mut set = seeded_set();

        // Act
        let content = set.switch_to("missing.rs").to_string();

        // Assert
        assert!(content.is_empty());
        assert_eq!(set.active_name(), "App.tsx");
    }

    #[test]
    fn test_cycle_wraps_in_both_directions() {
        // Arrange
        let mut set = seeded_set();
        set.open_file(&FileNode::file("a.txt", None));
        set.open_file(&FileNode::file("b.txt", None));

        // Act
        set.cycle(1);
        let after_forward = set.active_name().to_string();
        set.cycle(-1);
        let after_backward = set.active_name().to_string();

        // Assert
        assert_eq!(after_forward, "App.tsx");
        assert_eq!(after_backward, "b.txt");
    }
}
