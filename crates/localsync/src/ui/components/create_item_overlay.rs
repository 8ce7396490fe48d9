use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::domain::file_tree::ItemKind;
use crate::domain::input::InputState;
use crate::ui::Component;
use crate::ui::util::{centered_rect, display_width};

const OVERLAY_WIDTH_PERCENT: u16 = 50;
const MIN_OVERLAY_WIDTH: u16 = 40;
const OVERLAY_HEIGHT: u16 = 6;

/// Name prompt for a new file or folder.
pub struct CreateItemOverlay<'a> {
    input: &'a InputState,
    kind: ItemKind,
    parent_name: Option<&'a str>,
}

impl<'a> CreateItemOverlay<'a> {
    pub fn new(input: &'a InputState, kind: ItemKind, parent_name: Option<&'a str>) -> Self {
        Self {
            input,
            kind,
            parent_name,
        }
    }

    fn title(&self) -> String {
        let location = self.parent_name.unwrap_or("project root");

        format!(" New {} in {location} ", self.kind.label())
    }
}

impl Component for CreateItemOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(
            area,
            OVERLAY_WIDTH_PERCENT,
            0,
            MIN_OVERLAY_WIDTH,
            OVERLAY_HEIGHT,
        );

        f.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" Name: ", Style::default().fg(Color::Cyan)),
                Span::raw(self.input.text()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                " Enter to create · Esc to cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(self.title(), Style::default().fg(Color::Cyan)));
        let inner = block.inner(popup_area);

        f.render_widget(Paragraph::new(lines).block(block), popup_area);

        let cursor_x = " Name: ".len() + display_width(self.input.text(), self.input.cursor);
        let cursor_x = u16::try_from(cursor_x).unwrap_or(u16::MAX);
        f.set_cursor_position((
            inner.x.saturating_add(cursor_x).min(inner.right().saturating_sub(1)),
            inner.y.saturating_add(1),
        ));
    }
}
