pub mod analysis;
pub mod charts;
pub mod common;
pub mod company;
pub mod dashboard;
pub mod init;
pub mod result;

pub use analysis::{
    AnalysisViewModel, ConfidenceViewModel, EntityGroupViewModel, EntityKind,
    SentimentBadgeViewModel,
};
pub use charts::{
    ChartsViewModel, DistributionChartViewModel, IndustryBarViewModel, IndustryChartViewModel,
    RgbColor, SliceViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel, Tone, ViewMode};
pub use company::{CompanyListViewModel, CompanyOptionViewModel};
pub use dashboard::{
    AnalyzeButtonViewModel, DashboardViewModel, SelectorViewModel, StatusBarViewModel,
};
pub use init::InitViewModel;
pub use result::CommandResultViewModel;

use std::fmt;

/// Console rendering of a view model
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
