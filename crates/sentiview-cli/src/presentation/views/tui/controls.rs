//! Company selector and analyze button

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{AnalyzeButtonViewModel, SelectorViewModel};

pub struct ControlsView<'a> {
    selector: &'a SelectorViewModel,
    button: &'a AnalyzeButtonViewModel,
    spinner: &'a str,
}

impl<'a> ControlsView<'a> {
    pub fn new(
        selector: &'a SelectorViewModel,
        button: &'a AnalyzeButtonViewModel,
        spinner: &'a str,
    ) -> Self {
        Self {
            selector,
            button,
            spinner,
        }
    }

    fn selector_line(&self) -> Line<'a> {
        let arrow = Style::default().fg(Color::Yellow);
        let current = match self.selector.selected.and_then(|i| self.selector.options.get(i)) {
            Some(option) => Span::styled(
                option.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                self.selector.placeholder.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        };

        let position = match self.selector.selected {
            Some(i) => format!("  {}/{}", i + 1, self.selector.options.len()),
            None => String::new(),
        };

        Line::from(vec![
            Span::styled("◀ ", arrow),
            current,
            Span::styled(" ▶", arrow),
            Span::styled(position, Style::default().add_modifier(Modifier::DIM)),
        ])
    }

    fn button_line(&self) -> Line<'a> {
        let (text, style) = if self.button.busy {
            (
                format!("{} {}", self.spinner, self.button.label),
                Style::default().fg(Color::Yellow),
            )
        } else if self.button.enabled {
            (
                self.button.label.clone(),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                self.button.label.clone(),
                Style::default().fg(Color::DarkGray),
            )
        };

        Line::from(Span::styled(format!("[ {} ]", text), style))
    }
}

impl<'a> Widget for ControlsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(24)]).split(area);

        Paragraph::new(self.selector_line())
            .block(Block::default().title("Company").borders(Borders::ALL))
            .render(chunks[0], buf);

        Paragraph::new(self.button_line())
            .block(Block::default().borders(Borders::ALL))
            .render(chunks[1], buf);
    }
}
