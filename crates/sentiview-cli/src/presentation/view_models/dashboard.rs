use serde::Serialize;

use super::analysis::AnalysisViewModel;
use super::charts::ChartsViewModel;
use super::common::StatusLevel;
use super::company::CompanyOptionViewModel;

/// Everything the dashboard screen shows, rebuilt on every frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    pub subtitle: String,
    pub selector: SelectorViewModel,
    pub analyze_button: AnalyzeButtonViewModel,
    pub result: Option<AnalysisViewModel>,
    pub error: Option<String>,
    pub charts: ChartsViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorViewModel {
    pub placeholder: String,
    pub options: Vec<CompanyOptionViewModel>,
    /// Index into `options`; `None` when the placeholder is chosen
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeButtonViewModel {
    pub enabled: bool,
    pub busy: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub phase: String,
    pub message: String,
    pub level: StatusLevel,
}
