use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Title banner
pub struct HeaderView<'a> {
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> HeaderView<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(self.subtitle, Style::default().add_modifier(Modifier::DIM)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
