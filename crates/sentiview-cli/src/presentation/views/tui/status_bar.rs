use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(40)]).split(inner);

        let status_line = Line::from(vec![
            Span::styled(
                format!("{} ", self.model.phase),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[↑/↓]", key),
            Span::raw("company "),
            Span::styled("[Enter]", key),
            Span::raw("analyze "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
