use std::fmt;

use crate::presentation::formatters::{paint, render_bar};
use crate::presentation::view_models::{AnalysisViewModel, CreateView, ViewMode};

const CONFIDENCE_BAR_WIDTH: usize = 20;

impl CreateView for AnalysisViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            ViewMode::Compact => Box::new(CompactAnalysisView { data: self }),
            ViewMode::Standard => Box::new(AnalysisView { data: self }),
        }
    }
}

// --------------------------------------------------------
// Full result card
// --------------------------------------------------------

struct AnalysisView<'a> {
    data: &'a AnalysisViewModel,
}

impl<'a> fmt::Display for AnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let sentiment = format!("{} {}", d.sentiment.icon, d.sentiment.label);

        writeln!(
            f,
            "{} {}",
            paint::bold(&d.company_name),
            paint::dim(&format!("({})", d.stock_code))
        )?;
        writeln!(
            f,
            "Sentiment:  {}",
            paint::toned(&sentiment, d.sentiment.tone)
        )?;
        writeln!(
            f,
            "Confidence: {} {}%",
            render_bar(d.confidence.ratio, CONFIDENCE_BAR_WIDTH),
            d.confidence.percent
        )?;

        writeln!(f)?;
        writeln!(f, "{}", paint::bold("News Summary"))?;
        writeln!(f, "  {}", d.news_summary)?;
        writeln!(f)?;
        writeln!(f, "{}", paint::bold("Market Implications"))?;
        writeln!(f, "  {}", d.market_implications)?;
        writeln!(f)?;

        for group in &d.entities {
            let items = if group.items.is_empty() {
                paint::dim("-")
            } else {
                group.items.join(", ")
            };
            writeln!(f, "{:<12} {}", format!("{}:", group.title), items)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// One-line summary
// --------------------------------------------------------

struct CompactAnalysisView<'a> {
    data: &'a AnalysisViewModel,
}

impl<'a> fmt::Display for CompactAnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let sentiment = format!("{} {:<8}", d.sentiment.icon, d.sentiment.label);
        writeln!(
            f,
            "{:<6} {} {:>3}%  {}",
            d.stock_code,
            paint::toned(&sentiment, d.sentiment.tone),
            d.confidence.percent,
            d.company_name
        )
    }
}
