use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::terminal::{PROMPT_MARKER, TerminalSession};
use crate::ui::Component;
use crate::ui::util::display_width;

/// Simulated terminal output with the prompt line at the bottom.
pub struct TerminalPanel<'a> {
    is_focused: bool,
    session: &'a TerminalSession,
}

impl<'a> TerminalPanel<'a> {
    pub fn new(session: &'a TerminalSession, is_focused: bool) -> Self {
        Self {
            is_focused,
            session,
        }
    }

    /// Output lines with the pending input appended to the trailing prompt.
    fn display_lines(&self) -> Vec<Line<'a>> {
        let output = self.session.output_lines();
        let mut lines: Vec<Line<'a>> = output
            .iter()
            .map(|line| {
                let style = if line.starts_with(PROMPT_MARKER) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };

                Line::from(Span::styled(line.as_str(), style))
            })
            .collect();

        if let Some(last) = lines.last_mut()
            && output.last().map(String::as_str) == Some(PROMPT_MARKER)
        {
            last.push_span(Span::raw(self.session.input.text()));
        }

        lines
    }
}

impl Component for TerminalPanel<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Terminal ", Style::default().fg(Color::Cyan)));
        let inner = block.inner(area);

        let lines = self.display_lines();
        let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let scroll = line_count.saturating_sub(inner.height);

        f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);

        if self.is_focused {
            let input = &self.session.input;
            let column = PROMPT_MARKER.len() + display_width(input.text(), input.cursor);
            let column = u16::try_from(column).unwrap_or(u16::MAX);
            let row = line_count.saturating_sub(1).saturating_sub(scroll);
            f.set_cursor_position((
                inner.x.saturating_add(column).min(inner.right().saturating_sub(1)),
                inner.y.saturating_add(row),
            ));
        }
    }
}
