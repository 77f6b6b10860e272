//! Dashboard widgets
//!
//! Each widget is a thin wrapper around a view model reference. Layout and
//! color mapping happen here; no data is computed.

pub mod charts;
pub mod controls;
pub mod dashboard;
pub mod header;
pub mod result_card;
pub mod status_bar;

pub use charts::{DistributionChartView, IndustryChartView};
pub use controls::ControlsView;
pub use dashboard::DashboardView;
pub use header::HeaderView;
pub use result_card::{EntitiesView, ResultPanelView};
pub use status_bar::StatusBarView;

use ratatui::style::Color;

use crate::presentation::view_models::{RgbColor, StatusLevel, Tone};

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn tone_to_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
        Tone::Neutral => Color::Yellow,
    }
}

pub(crate) fn rgb(color: RgbColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width.max(1) as usize;
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
