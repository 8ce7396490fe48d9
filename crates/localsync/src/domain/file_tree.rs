use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier assigned to one explorer node for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generates a fresh random identifier for a newly created node.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an identifier provided by seed data.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which kind of node the user asked to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Folder,
}

impl ItemKind {
    /// Returns the lowercase label used in dialogs and log lines.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::File => "file",
            ItemKind::Folder => "folder",
        }
    }
}

/// Payload that differs between files and folders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Folder {
        #[serde(default)]
        children: Vec<FileNode>,
        #[serde(default)]
        expanded: bool,
    },
}

/// One entry of the virtual project tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub id: NodeId,
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl FileNode {
    /// Creates a file node with a generated id.
    pub fn file(name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id: NodeId::generate(),
            name: name.into(),
            kind: NodeKind::File { content },
        }
    }

    /// Creates an empty, expanded folder node with a generated id.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::generate(),
            name: name.into(),
            kind: NodeKind::Folder {
                children: Vec::new(),
                expanded: true,
            },
        }
    }

    /// Creates a node of `kind` the way the new-item dialog does.
    pub fn new_item(kind: ItemKind, name: impl Into<String>) -> Self {
        match kind {
            ItemKind::File => Self::file(name, None),
            ItemKind::Folder => Self::folder(name),
        }
    }

    /// Replaces the generated id, used by seed data and tests.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = NodeId::from_raw(id);
        self
    }

    /// Appends `children` to a folder node. Files are returned unchanged.
    #[must_use]
    pub fn with_children(mut self, new_children: Vec<FileNode>) -> Self {
        if let NodeKind::Folder { children, .. } = &mut self.kind {
            children.extend(new_children);
        }
        self
    }

    /// Sets the seed expansion flag of a folder node.
    #[must_use]
    pub fn with_expanded(mut self, value: bool) -> Self {
        if let NodeKind::Folder { expanded, .. } = &mut self.kind {
            *expanded = value;
        }
        self
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Returns folder children, or an empty slice for files.
    pub fn children(&self) -> &[FileNode] {
        match &self.kind {
            NodeKind::Folder { children, .. } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Returns the explicit content of a file node, if any.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Returns the folder's own expansion flag; always `false` for files.
    pub fn expanded_flag(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { expanded: true, .. })
    }
}

/// Result of a permissive insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The node was attached. `expand` names the parent folder the caller
    /// should mark expanded, `None` for root inserts.
    Inserted { expand: Option<NodeId> },
    /// The parent was missing or was a file; nothing changed.
    Dropped,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("no node with id `{0}` exists in the tree")]
    ParentNotFound(NodeId),
    #[error("node `{0}` is a file and cannot hold children")]
    ParentNotFolder(NodeId),
}

/// Result of a name filter: the kept nodes and the folders shown open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredForest {
    pub nodes: Vec<FileNode>,
    /// Root folders kept only because a direct child matched. They are shown
    /// open whatever their expansion flag says.
    pub forced_open: HashSet<NodeId>,
}

/// Ordered forest of explorer nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTree {
    roots: Vec<FileNode>,
}

impl FileTree {
    pub fn new(roots: Vec<FileNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[FileNode] {
        &self.roots
    }

    /// Returns the first node in pre-order whose id equals `id`.
    pub fn find_by_id(&self, id: &NodeId) -> Option<&FileNode> {
        find_in(&self.roots, id)
    }

    /// Attaches `node` under `parent_id`, or at the root when `parent_id` is
    /// `None`.
    ///
    /// A missing or non-folder parent silently drops the node and leaves the
    /// tree untouched.
    pub fn insert(&mut self, parent_id: Option<&NodeId>, node: FileNode) -> InsertOutcome {
        let Some(parent_id) = parent_id else {
            self.roots.push(node);

            return InsertOutcome::Inserted { expand: None };
        };

        match insert_into(&mut self.roots, parent_id, node) {
            Ok(()) => InsertOutcome::Inserted {
                expand: Some(parent_id.clone()),
            },
            Err(_) => InsertOutcome::Dropped,
        }
    }

    /// Same as [`FileTree::insert`] but reports why a node was not attached.
    ///
    /// # Errors
    /// Returns [`TreeError::ParentNotFound`] when no node has `parent_id`,
    /// and [`TreeError::ParentNotFolder`] when that node is a file.
    pub fn try_insert(
        &mut self,
        parent_id: Option<&NodeId>,
        node: FileNode,
    ) -> Result<InsertOutcome, TreeError> {
        if let Some(parent_id) = parent_id {
            match self.find_by_id(parent_id) {
                None => return Err(TreeError::ParentNotFound(parent_id.clone())),
                Some(parent) if !parent.is_folder() => {
                    return Err(TreeError::ParentNotFolder(parent_id.clone()));
                }
                Some(_) => {}
            }
        }

        Ok(self.insert(parent_id, node))
    }

    /// Returns the forest narrowed to nodes whose name contains `query`,
    /// ignoring case.
    ///
    /// Only root nodes and their direct children are examined. A root node
    /// that matches is kept whole. A root folder with matching direct
    /// children is kept with just those children and listed in
    /// [`FilteredForest::forced_open`]. An empty query returns the forest
    /// unchanged.
    pub fn filter_by_name(&self, query: &str) -> FilteredForest {
        if query.is_empty() {
            return FilteredForest {
                nodes: self.roots.clone(),
                forced_open: HashSet::new(),
            };
        }

        let needle = query.to_lowercase();
        let mut filtered = FilteredForest::default();

        for node in &self.roots {
            if name_matches(&node.name, &needle) {
                filtered.nodes.push(node.clone());

                continue;
            }

            let NodeKind::Folder { children, .. } = &node.kind else {
                continue;
            };
            let matching_children: Vec<FileNode> = children
                .iter()
                .filter(|child| name_matches(&child.name, &needle))
                .cloned()
                .collect();
            if matching_children.is_empty() {
                continue;
            }

            filtered.forced_open.insert(node.id.clone());
            filtered.nodes.push(FileNode {
                id: node.id.clone(),
                name: node.name.clone(),
                kind: NodeKind::Folder {
                    children: matching_children,
                    expanded: true,
                },
            });
        }

        filtered
    }
}

fn find_in<'a>(nodes: &'a [FileNode], id: &NodeId) -> Option<&'a FileNode> {
    for node in nodes {
        if node.id == *id {
            return Some(node);
        }

        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }

    None
}

/// Pre-order search for the folder `parent_id`; hands `node` back on miss.
fn insert_into(nodes: &mut [FileNode], parent_id: &NodeId, node: FileNode) -> Result<(), FileNode> {
    let mut node = node;

    for candidate in nodes.iter_mut() {
        let NodeKind::Folder { children, .. } = &mut candidate.kind else {
            continue;
        };

        if candidate.id == *parent_id {
            children.push(node);

            return Ok(());
        }

        node = match insert_into(children, parent_id, node) {
            Ok(()) => return Ok(()),
            Err(node) => node,
        };
    }

    Err(node)
}

fn name_matches(name: &str, lowercase_needle: &str) -> bool {
    name.to_lowercase().contains(lowercase_needle)
}

/// Per-folder display flags, keyed by node id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: HashMap<NodeId, bool>,
}

impl ExpansionState {
    /// Seeds flags from root folders and their direct child folders.
    pub fn from_roots(roots: &[FileNode]) -> Self {
        let mut flags = HashMap::new();

        for root in roots.iter().filter(|node| node.is_folder()) {
            flags.insert(root.id.clone(), root.expanded_flag());

            for child in root.children().iter().filter(|node| node.is_folder()) {
                flags.insert(child.id.clone(), child.expanded_flag());
            }
        }

        Self { flags }
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.flags.insert(id, expanded);
    }

    /// Flips the flag for folder `id`. File ids and unknown ids are ignored.
    pub fn toggle(&mut self, tree: &FileTree, id: &NodeId) {
        if !tree.find_by_id(id).is_some_and(FileNode::is_folder) {
            return;
        }

        let expanded = self.is_expanded(id);
        self.flags.insert(id.clone(), !expanded);
    }
}

/// One line of the flattened explorer listing.
#[derive(Clone, Copy, Debug)]
pub struct TreeRow<'a> {
    pub depth: usize,
    pub expanded: bool,
    pub node: &'a FileNode,
}

/// Flattens `forest` into display rows, descending only into open folders.
///
/// A folder is open when `expansion` says so or when its id is in
/// `forced_open`.
pub fn visible_rows<'a>(
    forest: &'a [FileNode],
    expansion: &ExpansionState,
    forced_open: &HashSet<NodeId>,
) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    push_rows(forest, expansion, forced_open, 0, &mut rows);

    rows
}

fn push_rows<'a>(
    nodes: &'a [FileNode],
    expansion: &ExpansionState,
    forced_open: &HashSet<NodeId>,
    depth: usize,
    rows: &mut Vec<TreeRow<'a>>,
) {
    for node in nodes {
        let expanded = node.is_folder()
            && (expansion.is_expanded(&node.id) || forced_open.contains(&node.id));
        rows.push(TreeRow {
            depth,
            expanded,
            node,
        });

        if expanded {
            push_rows(node.children(), expansion, forced_open, depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileTree {
        FileTree::new(vec![
            FileNode::folder("node_modules")
                .with_id("1")
                .with_expanded(false),
            FileNode::folder("src")
                .with_id("3")
                .with_children(vec![
                    FileNode::folder("components")
                        .with_id("3-1")
                        .with_children(vec![FileNode::file("Button.tsx", None).with_id("3-1-1")]),
                    FileNode::file("App.tsx", None).with_id("3-3"),
                    FileNode::file("styles.css", None).with_id("3-5"),
                ]),
            FileNode::file("README.md", None).with_id("6"),
        ])
    }

    fn names(nodes: &[FileNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.name.as_str()).collect()
    }

    #[test]
    fn test_find_by_id_returns_nested_node() {
        // Arrange
        let tree = sample_tree();

        // Act
        let node = tree.find_by_id(&NodeId::from_raw("3-1-1"));

        // Assert
        assert_eq!(node.map(|node| node.name.as_str()), Some("Button.tsx"));
    }

    #[test]
    fn test_find_by_id_returns_none_for_unknown_id() {
        // Arrange
        let tree = sample_tree();

        // Act
        let node = tree.find_by_id(&NodeId::from_raw("missing"));

        // Assert
        assert!(node.is_none());
    }

    #[test]
    fn test_insert_without_parent_appends_to_root() {
        // Arrange
        let mut tree = sample_tree();

        // Act
        let outcome = tree.insert(None, FileNode::file("notes.txt", None));

        // Assert
        assert_eq!(outcome, InsertOutcome::Inserted { expand: None });
        assert_eq!(
            tree.roots().last().map(|node| node.name.as_str()),
            Some("notes.txt")
        );
    }

    #[test]
    fn test_insert_under_nested_folder_requests_parent_expansion() {
        // Arrange
        let mut tree = sample_tree();
        let parent_id = NodeId::from_raw("3-1");

        // Act
        let outcome = tree.insert(Some(&parent_id), FileNode::file("Modal.tsx", None));

        // Assert
        assert_eq!(
            outcome,
            InsertOutcome::Inserted {
                expand: Some(parent_id.clone())
            }
        );
        let parent = tree.find_by_id(&parent_id).expect("parent should exist");
        assert_eq!(names(parent.children()), vec!["Button.tsx", "Modal.tsx"]);
    }

    #[test]
    fn test_insert_under_unknown_parent_leaves_tree_unchanged() {
        // Arrange
        let mut tree = sample_tree();
        let before = tree.clone();

        // Act
        let outcome = tree.insert(
            Some(&NodeId::from_raw("does-not-exist")),
            FileNode::file("lost.txt", None),
        );

        // Assert
        assert_eq!(outcome, InsertOutcome::Dropped);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_insert_under_file_parent_is_dropped() {
        // Arrange
        let mut tree = sample_tree();
        let before = tree.clone();

        // Act
        let outcome = tree.insert(
            Some(&NodeId::from_raw("3-3")),
            FileNode::file("child.txt", None),
        );

        // Assert
        assert_eq!(outcome, InsertOutcome::Dropped);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_try_insert_reports_missing_and_file_parents() {
        // Arrange
        let mut tree = sample_tree();

        // Act
        let missing = tree.try_insert(
            Some(&NodeId::from_raw("nope")),
            FileNode::file("a.txt", None),
        );
        let file_parent = tree.try_insert(
            Some(&NodeId::from_raw("6")),
            FileNode::file("b.txt", None),
        );

        // Assert
        assert_eq!(
            missing,
            Err(TreeError::ParentNotFound(NodeId::from_raw("nope")))
        );
        assert_eq!(
            file_parent,
            Err(TreeError::ParentNotFolder(NodeId::from_raw("6")))
        );
        assert_eq!(tree, sample_tree());
    }

    #[test]
    fn test_filter_by_name_empty_query_returns_forest_unchanged() {
        // Arrange
        let tree = sample_tree();

        // Act
        let filtered = tree.filter_by_name("");

        // Assert
        assert_eq!(filtered.nodes, tree.roots());
        assert!(filtered.forced_open.is_empty());
    }

    #[test]
    fn test_filter_by_name_keeps_parent_of_matching_child() {
        // Arrange
        let tree = FileTree::new(vec![
            FileNode::folder("src")
                .with_id("src")
                .with_children(vec![FileNode::file("App.tsx", None).with_id("app")]),
        ]);

        // Act
        let filtered = tree.filter_by_name("app");

        // Assert
        assert_eq!(names(&filtered.nodes), vec!["src"]);
        assert!(filtered.forced_open.contains(&NodeId::from_raw("src")));
        assert_eq!(names(filtered.nodes[0].children()), vec!["App.tsx"]);
    }

    #[test]
    fn test_filter_by_name_keeps_only_matching_children() {
        // Arrange
        let tree = sample_tree();

        // Act
        let filtered = tree.filter_by_name("CSS");

        // Assert
        assert_eq!(names(&filtered.nodes), vec!["src"]);
        assert_eq!(names(filtered.nodes[0].children()), vec!["styles.css"]);
    }

    #[test]
    fn test_filter_by_name_direct_match_keeps_all_children() {
        // Arrange
        let tree = sample_tree();

        // Act
        let filtered = tree.filter_by_name("sr");

        // Assert
        assert_eq!(names(&filtered.nodes), vec!["src"]);
        assert_eq!(filtered.nodes[0].children().len(), 3);
        assert!(filtered.forced_open.is_empty());
    }

    #[test]
    fn test_filter_by_name_does_not_look_at_grandchildren() {
        // Arrange
        let tree = sample_tree();

        // Act
        let filtered = tree.filter_by_name("button");

        // Assert
        assert!(filtered.nodes.is_empty());
    }

    #[test]
    fn test_expansion_toggle_flips_folder_and_ignores_file() {
        // Arrange
        let tree = sample_tree();
        let mut expansion = ExpansionState::from_roots(tree.roots());
        let folder_id = NodeId::from_raw("1");
        let file_id = NodeId::from_raw("6");

        // Act
        expansion.toggle(&tree, &folder_id);
        expansion.toggle(&tree, &file_id);

        // Assert
        assert!(expansion.is_expanded(&folder_id));
        assert!(!expansion.is_expanded(&file_id));
    }

    #[test]
    fn test_expansion_from_roots_seeds_two_levels() {
        // Arrange
        let tree = sample_tree();

        // Act
        let expansion = ExpansionState::from_roots(tree.roots());

        // Assert
        assert!(!expansion.is_expanded(&NodeId::from_raw("1")));
        assert!(expansion.is_expanded(&NodeId::from_raw("3")));
        assert!(expansion.is_expanded(&NodeId::from_raw("3-1")));
    }

    #[test]
    fn test_visible_rows_skips_collapsed_folders() {
        // Arrange
        let tree = sample_tree();
        let mut expansion = ExpansionState::from_roots(tree.roots());
        expansion.set_expanded(NodeId::from_raw("3-1"), false);

        // Act
        let rows = visible_rows(tree.roots(), &expansion, &HashSet::new());

        // Assert
        let listing: Vec<(usize, &str)> = rows
            .iter()
            .map(|row| (row.depth, row.node.name.as_str()))
            .collect();
        assert_eq!(
            listing,
            vec![
                (0, "node_modules"),
                (0, "src"),
                (1, "components"),
                (1, "App.tsx"),
                (1, "styles.css"),
                (0, "README.md"),
            ]
        );
    }

    #[test]
    fn test_visible_rows_opens_forced_folders_in_filtered_view() {
        // Arrange
        let tree = sample_tree();
        let mut expansion = ExpansionState::from_roots(tree.roots());
        expansion.set_expanded(NodeId::from_raw("3"), false);
        let filtered = tree.filter_by_name("app");

        // Act
        let rows = visible_rows(&filtered.nodes, &expansion, &filtered.forced_open);

        // Assert
        assert_eq!(rows.len(), 2);
        assert!(rows[0].expanded);
        assert_eq!(rows[1].node.name, "App.tsx");
    }

    #[test]
    fn test_visible_rows_keeps_collapsed_state_of_directly_matched_folder() {
        // Arrange
        let tree = sample_tree();
        let mut expansion = ExpansionState::from_roots(tree.roots());
        expansion.set_expanded(NodeId::from_raw("3"), false);
        let filtered = tree.filter_by_name("src");

        // Act
        let rows = visible_rows(&filtered.nodes, &expansion, &filtered.forced_open);

        // Assert
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].node.name, "src");
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_node_json_round_trip_uses_type_tag() {
        // Arrange
        let json = r#"{"id":"2","name":"public","type":"folder","expanded":true,
            "children":[{"id":"2-1","name":"favicon.ico","type":"file"}]}"#;

        // Act
        let node: FileNode = serde_json::from_str(json).expect("node should parse");

        // Assert
        assert!(node.is_folder());
        assert!(node.expanded_flag());
        assert_eq!(node.children()[0].content(), None);
        assert_eq!(node.children()[0].id.as_str(), "2-1");
    }

    #[test]
    fn test_folder_without_children_deserializes_to_empty_folder() {
        // Arrange
        let json = r#"{"id":"1","name":"node_modules","type":"folder"}"#;

        // Act
        let node: FileNode = serde_json::from_str(json).expect("node should parse");

        // Assert
        assert!(node.is_folder());
        assert!(node.children().is_empty());
        assert!(!node.expanded_flag());
    }
}
