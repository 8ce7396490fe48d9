use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::language::Language;
use crate::domain::open_files::OpenFileSet;
use crate::ui::Component;

/// Strip of open file tabs with the active file's language on the right.
pub struct Tabs<'a> {
    open_files: &'a OpenFileSet,
}

impl<'a> Tabs<'a> {
    pub fn new(open_files: &'a OpenFileSet) -> Self {
        Self { open_files }
    }

    fn tab_spans(&self) -> Vec<Span<'a>> {
        let active_name = self.open_files.active_name();

        self.open_files
            .names()
            .map(|name| {
                if name == active_name {
                    Span::styled(
                        format!(" {name} "),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(format!(" {name} "), Style::default().fg(Color::Gray))
                }
            })
            .collect()
    }
}

impl Component for Tabs<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let language = Language::from_file_name(self.open_files.active_name());
        let language_text = format!("{} ", language.label());

        let mut spans = self.tab_spans();
        let used_width: usize = spans.iter().map(Span::width).sum();
        let padding = usize::from(area.width).saturating_sub(used_width + language_text.len());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(language_text, Style::default().fg(Color::DarkGray)));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
