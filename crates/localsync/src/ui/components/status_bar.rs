use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::presence::Collaborator;
use crate::ui::Component;
use crate::ui::state::app_mode::Pane;

/// Top bar with the product name, focused pane and online collaborators.
pub struct StatusBar<'a> {
    collaborators: &'a [Collaborator],
    pane: Pane,
}

impl<'a> StatusBar<'a> {
    pub fn new(pane: Pane, collaborators: &'a [Collaborator]) -> Self {
        Self {
            collaborators,
            pane,
        }
    }

    fn pane_label(&self) -> &'static str {
        match self.pane {
            Pane::Explorer => "Explorer",
            Pane::Editor => "Editor",
            Pane::Terminal => "Terminal",
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" LocalSync Studio v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let focus_text = Span::styled(
            format!("  {}", self.pane_label()),
            Style::default().fg(Color::Gray),
        );

        let mut right_spans: Vec<Span<'_>> = self
            .collaborators
            .iter()
            .map(|collaborator| {
                Span::styled(
                    format!(" {} ", collaborator.initial()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(collaborator.terminal_color())
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        right_spans.push(Span::styled(
            format!(" {} online ", self.collaborators.len()),
            Style::default().fg(Color::Gray),
        ));

        let used_width: usize = left_text.width()
            + focus_text.width()
            + right_spans.iter().map(Span::width).sum::<usize>();
        let padding = usize::from(area.width).saturating_sub(used_width);

        let mut spans = vec![left_text, focus_text, Span::raw(" ".repeat(padding))];
        spans.extend(right_spans);

        let status_bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::presence::default_collaborators;

    #[test]
    fn test_status_bar_lists_collaborators() {
        // Arrange
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let collaborators = default_collaborators();
        let status_bar = StatusBar::new(Pane::Editor, &collaborators);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                status_bar.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("LocalSync Studio"));
        assert!(text.contains("Editor"));
        assert!(text.contains(" A  T "));
        assert!(text.contains("2 online"));
    }
}
