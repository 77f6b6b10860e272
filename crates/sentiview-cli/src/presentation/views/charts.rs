use std::fmt;

use crate::presentation::formatters::{paint, render_bar};
use crate::presentation::view_models::{
    ChartsViewModel, CreateView, DistributionChartViewModel, IndustryChartViewModel, ViewMode,
};

const BAR_WIDTH: usize = 30;

impl CreateView for ChartsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ChartsView { data: self, mode })
    }
}

struct ChartsView<'a> {
    data: &'a ChartsViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ChartsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DistributionView::new(&self.data.distribution, self.mode))?;
        writeln!(f)?;
        write!(f, "{}", IndustryView::new(&self.data.industries, self.mode))
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

// --------------------------------------------------------
// Sentiment distribution (pie chart on the web, share bars here)
// --------------------------------------------------------

struct DistributionView<'a> {
    data: &'a DistributionChartViewModel,
    mode: ViewMode,
}

impl<'a> DistributionView<'a> {
    fn new(data: &'a DistributionChartViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for DistributionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", paint::bold(&self.data.title))?;
        let width = label_width(self.data.slices.iter().map(|s| s.label.as_str()));

        for slice in &self.data.slices {
            let percent = (slice.share * 100.0).round();
            match self.mode {
                ViewMode::Compact => writeln!(
                    f,
                    "  {:<width$}  {} ({}%)",
                    slice.label,
                    slice.value,
                    percent,
                    width = width
                )?,
                ViewMode::Standard => writeln!(
                    f,
                    "  {:<width$}  {} {:>5} ({}%)",
                    slice.label,
                    paint::rgb(&render_bar(slice.share, BAR_WIDTH), slice.color),
                    slice.value,
                    percent,
                    width = width
                )?,
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Industry scores (bar chart, order preserved)
// --------------------------------------------------------

struct IndustryView<'a> {
    data: &'a IndustryChartViewModel,
    mode: ViewMode,
}

impl<'a> IndustryView<'a> {
    fn new(data: &'a IndustryChartViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for IndustryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", paint::bold(&self.data.title))?;
        let width = label_width(self.data.bars.iter().map(|b| b.label.as_str()));

        for bar in &self.data.bars {
            match self.mode {
                ViewMode::Compact => {
                    writeln!(f, "  {:<width$}  {}", bar.label, bar.value, width = width)?
                }
                ViewMode::Standard => {
                    let ratio = if self.data.max > 0.0 {
                        bar.value / self.data.max
                    } else {
                        0.0
                    };
                    writeln!(
                        f,
                        "  {:<width$}  {} {:>5}",
                        bar.label,
                        paint::rgb(&render_bar(ratio, BAR_WIDTH), self.data.fill),
                        bar.value,
                        width = width
                    )?
                }
            }
        }
        Ok(())
    }
}
