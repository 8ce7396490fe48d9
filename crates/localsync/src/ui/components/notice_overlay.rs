use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::Component;
use crate::ui::util::centered_rect;

const OVERLAY_WIDTH_PERCENT: u16 = 50;
const MIN_OVERLAY_WIDTH: u16 = 50;
const OVERLAY_HEIGHT: u16 = 7;

/// Blocking message box dismissed with Enter or Esc.
pub struct NoticeOverlay<'a> {
    message: &'a str,
    title: &'a str,
}

impl<'a> NoticeOverlay<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { message, title }
    }
}

impl Component for NoticeOverlay<'_> {
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
            Line::from(Span::styled(
                format!(" {}", self.message),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " Press Enter to dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    format!(" {} ", self.title),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        );

        f.render_widget(paragraph, popup_area);
    }
}
