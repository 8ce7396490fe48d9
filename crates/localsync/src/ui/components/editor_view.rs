use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::input::InputState;
use crate::domain::presence::Collaborator;
use crate::ui::Component;
use crate::ui::util::{display_width, scroll_to_keep_visible};

const GUTTER_WIDTH: usize = 5;

/// Editor body with line numbers and simulated collaborator cursors.
pub struct EditorView<'a> {
    collaborators: &'a [Collaborator],
    editor: &'a InputState,
    file_name: &'a str,
    is_focused: bool,
}

impl<'a> EditorView<'a> {
    pub fn new(
        editor: &'a InputState,
        file_name: &'a str,
        collaborators: &'a [Collaborator],
        is_focused: bool,
    ) -> Self {
        Self {
            collaborators,
            editor,
            file_name,
            is_focused,
        }
    }

    fn numbered_lines(&self) -> Vec<Line<'a>> {
        self.editor
            .text()
            .split('\n')
            .enumerate()
            .map(|(index, text)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", index + 1, width = GUTTER_WIDTH - 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(text),
                ])
            })
            .collect()
    }

    /// Screen cell of `(line, ch)` inside `inner`, if it is on screen.
    fn cell_position(
        &self,
        inner: Rect,
        scroll: u16,
        line: usize,
        ch: usize,
    ) -> Option<(u16, u16)> {
        let row = line.checked_sub(usize::from(scroll))?;
        let text_line = self.editor.text().split('\n').nth(line).unwrap_or_default();
        let past_end = ch.saturating_sub(text_line.chars().count());
        let column = GUTTER_WIDTH + display_width(text_line, ch) + past_end;

        let x = inner.x.checked_add(u16::try_from(column).ok()?)?;
        let y = inner.y.checked_add(u16::try_from(row).ok()?)?;
        if x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        Some((x, y))
    }
}

impl Component for EditorView<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", self.file_name),
                Style::default().fg(Color::Cyan),
            ));
        let inner = block.inner(area);
        let (cursor_line, cursor_column) = self.editor.cursor_line_column();
        let scroll = scroll_to_keep_visible(cursor_line, inner.height);

        f.render_widget(
            Paragraph::new(self.numbered_lines())
                .block(block)
                .scroll((scroll, 0)),
            area,
        );

        for collaborator in self.collaborators {
            let position = collaborator.position;
            let Some((x, y)) = self.cell_position(inner, scroll, position.line, position.ch) else {
                continue;
            };
            let style = Style::default()
                .bg(collaborator.terminal_color())
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
            if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                cell.set_style(style);
            }

            // Name tag right of the cursor, skipped when it would be clipped.
            let tag = collaborator.first_name();
            let tag_width =
                u16::try_from(display_width(tag, tag.chars().count())).unwrap_or(u16::MAX);
            let tag_x = x.saturating_add(1);
            if !tag.is_empty() && tag_x.saturating_add(tag_width) <= inner.right() {
                f.buffer_mut().set_string(tag_x, y, tag, style);
            }
        }

        if self.is_focused
            && let Some(position) = self.cell_position(inner, scroll, cursor_line, cursor_column)
        {
            f.set_cursor_position(position);
        }
    }
}
