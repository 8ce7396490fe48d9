use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::state::app_mode::Pane;

/// Bottom bar showing the latest status message, or key hints when there is
/// none.
pub struct FooterBar<'a> {
    pane: Pane,
    status_message: Option<&'a str>,
}

impl<'a> FooterBar<'a> {
    pub fn new(pane: Pane, status_message: Option<&'a str>) -> Self {
        Self {
            pane,
            status_message,
        }
    }

    fn hint(&self) -> &'static str {
        match self.pane {
            Pane::Explorer => "Enter open · / search · n new file · N new folder · ` terminal · ? help · q quit",
            Pane::Editor => "Esc explorer · Ctrl+n/p tabs · Ctrl+w close · Ctrl+s save · Ctrl+r run · F1 help",
            Pane::Terminal => "Enter run · Esc editor · Ctrl+t hide · F1 help",
        }
    }
}

impl Component for FooterBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let line = match self.status_message {
            Some(message) => Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(
                format!(" {}", self.hint()),
                Style::default().fg(Color::Gray),
            )),
        };

        let footer = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(footer, area);
    }
}
