use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::ExplorerState;
use crate::domain::file_tree::{ExpansionState, FileTree, TreeRow};
use crate::ui::Component;
use crate::ui::util::{display_width, scroll_to_keep_visible};

const INDENT: &str = "  ";
const SEARCH_HEIGHT: u16 = 3;

/// Explorer panel: a search box above the project tree.
pub struct FileTreePanel<'a> {
    expansion: &'a ExpansionState,
    explorer: &'a ExplorerState,
    is_focused: bool,
    is_searching: bool,
    tree: &'a FileTree,
}

impl<'a> FileTreePanel<'a> {
    pub fn new(
        tree: &'a FileTree,
        expansion: &'a ExpansionState,
        explorer: &'a ExplorerState,
        is_focused: bool,
        is_searching: bool,
    ) -> Self {
        Self {
            expansion,
            explorer,
            is_focused,
            is_searching,
            tree,
        }
    }

    fn row_line(row: &TreeRow<'_>, is_selected: bool) -> Line<'static> {
        let indent = INDENT.repeat(row.depth);
        let (marker, name_style) = if row.node.is_folder() {
            let marker = if row.expanded { "▾ " } else { "▸ " };

            (marker, Style::default().fg(Color::Yellow))
        } else {
            ("  ", Style::default().fg(Color::White))
        };
        let name_style = if is_selected {
            name_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            name_style
        };

        Line::from(vec![
            Span::raw(format!("{indent}{marker}")),
            Span::styled(row.node.name.clone(), name_style),
        ])
    }

    fn render_search(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.is_searching {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let query = self.explorer.query();
        let text = if query.is_empty() && !self.is_searching {
            Span::styled("Search files...", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(query.to_string())
        };

        let search = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(search, area);

        if self.is_searching {
            let cursor_x = display_width(query, self.explorer.search.cursor);
            let cursor_x = u16::try_from(cursor_x).unwrap_or(u16::MAX);
            f.set_cursor_position((
                area.x.saturating_add(1).saturating_add(cursor_x),
                area.y.saturating_add(1),
            ));
        }
    }
}

impl Component for FileTreePanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)])
            .split(area);

        self.render_search(f, chunks[0]);

        let listing = self.explorer.listing(self.tree);
        let rows = listing.rows(self.expansion);
        let mut lines: Vec<Line<'static>> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Self::row_line(row, index == self.explorer.selected_index))
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No matching files",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let inner_height = chunks[1].height.saturating_sub(2);
        let scroll = scroll_to_keep_visible(self.explorer.selected_index, inner_height);
        let tree_view = Paragraph::new(lines).scroll((scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(" Explorer ", Style::default().fg(Color::Cyan))),
        );

        f.render_widget(tree_view, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use std::collections::HashSet;

    use super::*;
    use crate::domain::file_tree::{FileNode, visible_rows};
    use crate::domain::input::InputState;

    fn sample_tree() -> FileTree {
        FileTree::new(vec![
            FileNode::folder("node_modules")
                .with_id("1")
                .with_expanded(false),
            FileNode::folder("src")
                .with_id("3")
                .with_children(vec![FileNode::file("App.tsx", None).with_id("3-3")]),
            FileNode::file("README.md", None).with_id("6"),
        ])
    }

    fn render_lines(panel: &FileTreePanel<'_>) -> Vec<String> {
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area);
            })
            .expect("failed to draw");

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_row_line_marks_folders_and_indents_children() {
        // Arrange
        let tree = sample_tree();
        let expansion = ExpansionState::from_roots(tree.roots());
        let rows = visible_rows(tree.roots(), &expansion, &HashSet::new());

        // Act
        let collapsed = FileTreePanel::row_line(&rows[0], false);
        let child = FileTreePanel::row_line(&rows[2], false);

        // Assert
        assert_eq!(collapsed.spans[0].content, "▸ ");
        assert_eq!(child.spans[0].content, "    ");
        assert_eq!(child.spans[1].content, "App.tsx");
    }

    #[test]
    fn test_render_lists_visible_rows() {
        // Arrange
        let tree = sample_tree();
        let expansion = ExpansionState::from_roots(tree.roots());
        let explorer = ExplorerState::default();
        let panel = FileTreePanel::new(&tree, &expansion, &explorer, true, false);

        // Act
        let lines = render_lines(&panel);

        // Assert
        assert!(lines[1].contains("Search files..."));
        assert!(lines[4].contains("▸ node_modules"));
        assert!(lines[5].contains("▾ src"));
        assert!(lines[6].contains("App.tsx"));
        assert!(lines[7].contains("README.md"));
    }

    #[test]
    fn test_render_with_unmatched_query_shows_placeholder() {
        // Arrange
        let tree = sample_tree();
        let expansion = ExpansionState::from_roots(tree.roots());
        let explorer = ExplorerState {
            search: InputState::with_text("zzz"),
            selected_index: 0,
        };
        let panel = FileTreePanel::new(&tree, &expansion, &explorer, false, true);

        // Act
        let lines = render_lines(&panel);

        // Assert
        assert!(lines[1].contains("zzz"));
        assert!(lines[4].contains("No matching files"));
    }
}
