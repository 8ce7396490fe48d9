use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::state::app_mode::Pane;
use crate::ui::util::centered_rect;

const OVERLAY_WIDTH_PERCENT: u16 = 60;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const MIN_OVERLAY_WIDTH: u16 = 30;
const MIN_OVERLAY_HEIGHT: u16 = 10;
const SCROLL_X_OFFSET: u16 = 0;

/// Centered popup overlay showing keybindings for the focused pane.
pub struct HelpOverlay {
    pane: Pane,
    scroll_offset: u16,
}

impl HelpOverlay {
    /// Creates a help overlay for the given pane and scroll position.
    pub fn new(pane: Pane, scroll_offset: u16) -> Self {
        Self {
            pane,
            scroll_offset,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bindings = self.pane.keybindings();
        let key_width = bindings.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(bindings.len() + 3);
        lines.push(Line::from(""));
        for (key, description) in bindings {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{key:>key_width$}"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": ", Style::default().fg(Color::White)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? / q / Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        lines
    }
}

impl Component for HelpOverlay {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(
            area,
            OVERLAY_WIDTH_PERCENT,
            OVERLAY_HEIGHT_PERCENT,
            MIN_OVERLAY_WIDTH,
            MIN_OVERLAY_HEIGHT,
        );

        f.render_widget(Clear, popup_area);

        let title = format!(" {} ", self.pane.title());
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(Span::styled(title, Style::default().fg(Color::Cyan))),
            )
            .scroll((self.scroll_offset, SCROLL_X_OFFSET));

        f.render_widget(paragraph, popup_area);
    }
}
