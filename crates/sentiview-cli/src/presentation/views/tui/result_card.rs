//! Analysis result card: sentiment badge, confidence gauge, texts and the
//! four entity columns.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{AnalysisViewModel, EntityGroupViewModel};

use super::tone_to_color;

/// Result area. Shows the card when a result exists, otherwise a hint,
/// the pending analysis or the last error.
pub struct ResultPanelView<'a> {
    result: Option<&'a AnalysisViewModel>,
    error: Option<&'a str>,
    busy: bool,
    spinner: &'a str,
}

impl<'a> ResultPanelView<'a> {
    pub fn new(
        result: Option<&'a AnalysisViewModel>,
        error: Option<&'a str>,
        busy: bool,
        spinner: &'a str,
    ) -> Self {
        Self {
            result,
            error,
            busy,
            spinner,
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let line = if self.busy {
            Line::from(Span::styled(
                format!("{} Analyzing...", self.spinner),
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(error) = self.error {
            Line::from(Span::styled(error, Style::default().fg(Color::Red)))
        } else {
            Line::from(Span::styled(
                "Select a company and press Enter to analyze.",
                Style::default().add_modifier(Modifier::DIM),
            ))
        };

        Paragraph::new(vec![Line::default(), line])
            .alignment(Alignment::Center)
            .block(Block::default().title("Analysis").borders(Borders::ALL))
            .render(area, buf);
    }
}

impl<'a> Widget for ResultPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.result {
            Some(result) => ResultCardView::new(result).render(area, buf),
            None => self.render_empty(area, buf),
        }
    }
}

pub struct ResultCardView<'a> {
    model: &'a AnalysisViewModel,
}

impl<'a> ResultCardView<'a> {
    pub fn new(model: &'a AnalysisViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ResultCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;
        let tone = tone_to_color(m.sentiment.tone);

        let block = Block::default()
            .title(format!("{} ({})", m.company_name, m.stock_code))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(6),
        ])
        .split(inner);

        let badge = Line::from(vec![
            Span::raw("Sentiment: "),
            Span::styled(
                format!(" {} {} ", m.sentiment.icon, m.sentiment.label),
                Style::default()
                    .fg(Color::Black)
                    .bg(tone)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(badge).render(rows[0], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(tone))
            .ratio(m.confidence.ratio)
            .label(format!("Confidence {}%", m.confidence.percent))
            .render(rows[1], buf);

        let heading = Style::default().add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(Span::styled("News Summary", heading)),
            Line::from(m.news_summary.as_str()),
            Line::default(),
            Line::from(Span::styled("Market Implications", heading)),
            Line::from(m.market_implications.as_str()),
        ];
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(rows[2], buf);

        EntitiesView::new(&m.entities).render(rows[3], buf);
    }
}

/// Entity groups side by side, one column each
pub struct EntitiesView<'a> {
    groups: &'a [EntityGroupViewModel],
}

impl<'a> EntitiesView<'a> {
    pub fn new(groups: &'a [EntityGroupViewModel]) -> Self {
        Self { groups }
    }
}

impl<'a> Widget for EntitiesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.groups.is_empty() {
            return;
        }

        let columns = Layout::horizontal(
            self.groups
                .iter()
                .map(|_| Constraint::Ratio(1, self.groups.len() as u32)),
        )
        .split(area);

        for (group, column) in self.groups.iter().zip(columns.iter()) {
            let items: Vec<Line> = group
                .items
                .iter()
                .map(|item| Line::from(format!("• {}", item)))
                .collect();

            Paragraph::new(items)
                .block(
                    Block::default()
                        .title(group.title.as_str())
                        .borders(Borders::ALL),
                )
                .render(*column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_analysis;
    use crate::presentation::views::tui::buffer_text;
    use sentiview_store::{AnalysisSource, StaticStore};

    fn render(widget: impl Widget, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_card_shows_badge_and_confidence() {
        let vm = present_analysis(&StaticStore::builtin().get("Apple Inc").unwrap());
        let text = render(ResultCardView::new(&vm), 120, 20);

        assert!(text.contains("Apple Inc (AAPL)"));
        assert!(text.contains("▲ Positive"));
        assert!(text.contains("Confidence 87%"));
        assert!(text.contains("News Summary"));
        assert!(text.contains("Key People"));
        assert!(text.contains("• Tim Cook"));
    }

    #[test]
    fn test_empty_entity_group_keeps_its_column() {
        let mut vm = present_analysis(&StaticStore::builtin().get("Google").unwrap());
        vm.entities[0].items.clear();
        let text = render(EntitiesView::new(&vm.entities), 100, 6);

        assert!(text.contains("Key People"));
        assert!(text.contains("Locations"));
        assert!(text.contains("Industries"));
    }

    #[test]
    fn test_panel_without_result_shows_error() {
        let text = render(
            ResultPanelView::new(None, Some("Stock code for Initech not found."), false, "|"),
            60,
            5,
        );
        assert!(text.contains("Stock code for Initech not found."));
    }

    #[test]
    fn test_panel_without_result_shows_progress() {
        let text = render(ResultPanelView::new(None, None, true, "|"), 60, 5);
        assert!(text.contains("| Analyzing..."));
    }
}
