use std::borrow::Cow;
use std::collections::HashSet;

use crate::domain::file_tree::{
    ExpansionState, FileNode, FileTree, FilteredForest, NodeId, TreeRow, visible_rows,
};
use crate::domain::input::InputState;

/// Forest shown by the explorer and the folders the active filter opens.
#[derive(Debug)]
pub struct Listing<'a> {
    pub forced_open: HashSet<NodeId>,
    pub nodes: Cow<'a, [FileNode]>,
}

impl Listing<'_> {
    pub fn rows(&self, expansion: &ExpansionState) -> Vec<TreeRow<'_>> {
        visible_rows(&self.nodes, expansion, &self.forced_open)
    }
}

/// Search query and row selection of the explorer panel.
#[derive(Clone, Debug, Default)]
pub struct ExplorerState {
    pub search: InputState,
    pub selected_index: usize,
}

impl ExplorerState {
    pub fn query(&self) -> &str {
        self.search.text()
    }

    /// Whether the listing currently shows a filtered copy of the tree.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
    }

    /// Returns what the explorer displays: the tree itself, or an owned
    /// filtered copy while a query is active.
    pub fn listing<'a>(&self, tree: &'a FileTree) -> Listing<'a> {
        if !self.is_filtered() {
            return Listing {
                forced_open: HashSet::new(),
                nodes: Cow::Borrowed(tree.roots()),
            };
        }

        let FilteredForest { nodes, forced_open } = tree.filter_by_name(self.query());

        Listing {
            forced_open,
            nodes: Cow::Owned(nodes),
        }
    }

    /// Returns a copy of the node under the selection, if any.
    pub fn selected_node(&self, tree: &FileTree, expansion: &ExpansionState) -> Option<FileNode> {
        self.listing(tree)
            .rows(expansion)
            .get(self.selected_index)
            .map(|row| row.node.clone())
    }

    pub fn row_count(&self, tree: &FileTree, expansion: &ExpansionState) -> usize {
        self.listing(tree).rows(expansion).len()
    }

    pub fn select_next(&mut self, row_count: usize) {
        if self.selected_index + 1 < row_count {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Pulls the selection back inside a listing that shrank.
    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected_index = self.selected_index.min(row_count.saturating_sub(1));
    }
}
