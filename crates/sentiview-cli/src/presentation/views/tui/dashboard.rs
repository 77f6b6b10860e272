//! Whole-screen layout
//!
//! ```text
//! +-------------------- header --------------------+
//! | company selector               | [ Analyze ]   |
//! | result card / hint / error                     |
//! | distribution chart     | industry bar chart    |
//! | status bar                                     |
//! +------------------------------------------------+
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::presentation::view_models::DashboardViewModel;

use super::{
    ControlsView, DistributionChartView, HeaderView, IndustryChartView, ResultPanelView,
    StatusBarView,
};

pub struct DashboardView<'a> {
    model: &'a DashboardViewModel,
    spinner: &'a str,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a DashboardViewModel, spinner: &'a str) -> Self {
        Self { model, spinner }
    }
}

impl<'a> Widget for DashboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;

        let rows = Layout::vertical([
            Constraint::Length(2),  // Header
            Constraint::Length(3),  // Selector + button
            Constraint::Min(8),     // Result
            Constraint::Length(12), // Charts
            Constraint::Length(3),  // Status bar
        ])
        .split(area);

        HeaderView::new(&m.title, &m.subtitle).render(rows[0], buf);
        ControlsView::new(&m.selector, &m.analyze_button, self.spinner).render(rows[1], buf);
        ResultPanelView::new(
            m.result.as_ref(),
            m.error.as_deref(),
            m.analyze_button.busy,
            self.spinner,
        )
        .render(rows[2], buf);

        let charts =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(rows[3]);
        DistributionChartView::new(&m.charts.distribution).render(charts[0], buf);
        IndustryChartView::new(&m.charts.industries).render(charts[1], buf);

        StatusBarView::new(&m.status_bar).render(rows[4], buf);
    }
}
