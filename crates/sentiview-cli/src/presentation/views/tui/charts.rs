use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{DistributionChartViewModel, IndustryChartViewModel};

use super::rgb;

/// Sentiment distribution as one segmented bar plus a legend with values
pub struct DistributionChartView<'a> {
    model: &'a DistributionChartViewModel,
}

impl<'a> DistributionChartView<'a> {
    pub fn new(model: &'a DistributionChartViewModel) -> Self {
        Self { model }
    }

    /// Split `width` cells across slices by share. Boundaries are rounded
    /// cumulatively so the segments always add up to the full width.
    fn segment_widths(&self, width: u16) -> Vec<u16> {
        let mut cumulative = 0.0;
        let mut start = 0u16;
        self.model
            .slices
            .iter()
            .map(|slice| {
                cumulative += slice.share;
                let end = ((cumulative * width as f64).round() as u16).min(width);
                let w = end.saturating_sub(start);
                start = start.max(end);
                w
            })
            .collect()
    }
}

impl<'a> Widget for DistributionChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let segments: Vec<Span> = self
            .model
            .slices
            .iter()
            .zip(self.segment_widths(rows[0].width))
            .map(|(slice, w)| {
                Span::styled(
                    " ".repeat(w as usize),
                    Style::default().bg(rgb(slice.color)),
                )
            })
            .collect();
        Paragraph::new(Line::from(segments)).render(rows[0], buf);

        let legend: Vec<Line> = self
            .model
            .slices
            .iter()
            .map(|slice| {
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(rgb(slice.color))),
                    Span::raw(format!(
                        "{:<10} {:>5} ({:.0}%)",
                        slice.label,
                        slice.value,
                        slice.share * 100.0
                    )),
                ])
            })
            .collect();
        Paragraph::new(legend).render(rows[2], buf);
    }
}

/// Industry scores as vertical bars in dataset order, value on each bar
pub struct IndustryChartView<'a> {
    model: &'a IndustryChartViewModel,
}

impl<'a> IndustryChartView<'a> {
    pub fn new(model: &'a IndustryChartViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for IndustryChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL);
        let inner = block.inner(area);

        let count = self.model.bars.len().max(1) as u16;
        let gap = 1;
        let bar_width = (inner.width.saturating_sub(gap * (count - 1)) / count).max(1);

        let bars: Vec<Bar> = self
            .model
            .bars
            .iter()
            .map(|bar| {
                Bar::default()
                    .value(bar.value.max(0.0).round() as u64)
                    .label(Line::from(bar.label.as_str()))
                    .text_value(format!("{}", bar.value))
            })
            .collect();

        BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(gap)
            .max(self.model.max.round() as u64)
            .bar_style(Style::default().fg(rgb(self.model.fill)))
            .value_style(Style::default().fg(Color::Black).bg(rgb(self.model.fill)))
            .render(area, buf);
    }
}
