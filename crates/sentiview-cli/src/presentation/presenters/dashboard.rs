use sentiview_runtime::{ControllerSnapshot, Phase};
use sentiview_types::CompanyEntry;

use super::analysis::present_analysis;
use super::company::present_company_option;
use crate::presentation::view_models::{
    AnalyzeButtonViewModel, ChartsViewModel, DashboardViewModel, SelectorViewModel,
    StatusBarViewModel, StatusLevel,
};

pub const SELECTOR_PLACEHOLDER: &str = "Choose a company...";

pub fn present_dashboard(
    snapshot: &ControllerSnapshot,
    companies: &[CompanyEntry],
    charts: &ChartsViewModel,
) -> DashboardViewModel {
    let selected = snapshot
        .selected
        .as_deref()
        .and_then(|name| companies.iter().position(|c| c.name == name));

    let busy = snapshot.phase == Phase::Busy;
    let analyze_button = AnalyzeButtonViewModel {
        enabled: snapshot.can_analyze,
        busy,
        label: if busy { "Analyzing..." } else { "Analyze" }.to_string(),
    };

    DashboardViewModel {
        title: "Market Sentiment Analyzer".to_string(),
        subtitle: "Company sentiment snapshots at a glance".to_string(),
        selector: SelectorViewModel {
            placeholder: SELECTOR_PLACEHOLDER.to_string(),
            options: companies.iter().map(present_company_option).collect(),
            selected,
        },
        analyze_button,
        result: snapshot.result.as_ref().map(present_analysis),
        error: snapshot.last_error.clone(),
        charts: charts.clone(),
        status_bar: present_status(snapshot),
    }
}

fn present_status(snapshot: &ControllerSnapshot) -> StatusBarViewModel {
    let (phase, message, level) = match snapshot.phase {
        Phase::Busy => (
            "BUSY",
            format!(
                "Analyzing {}...",
                snapshot.pending.as_deref().unwrap_or("company")
            ),
            StatusLevel::Warning,
        ),
        _ if snapshot.last_error.is_some() => (
            "ERROR",
            snapshot.last_error.clone().unwrap_or_default(),
            StatusLevel::Error,
        ),
        Phase::Shown => {
            let company = snapshot
                .result
                .as_ref()
                .map(|r| r.company_name.as_str())
                .unwrap_or_default();
            let message = match snapshot.completed_at {
                Some(at) => format!(
                    "Showing {} (analyzed {})",
                    company,
                    at.with_timezone(&chrono::Local).format("%H:%M:%S")
                ),
                None => format!("Showing {}", company),
            };
            ("SHOWN", message, StatusLevel::Success)
        }
        Phase::Selected => (
            "READY",
            format!(
                "Press Enter to analyze {}",
                snapshot.selected.as_deref().unwrap_or_default()
            ),
            StatusLevel::Info,
        ),
        Phase::Idle => (
            "IDLE",
            "Choose a company to begin".to_string(),
            StatusLevel::Info,
        ),
    };

    StatusBarViewModel {
        phase: phase.to_string(),
        message,
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_charts;
    use sentiview_store::{AnalysisSource, StaticStore};

    fn snapshot(phase: Phase) -> ControllerSnapshot {
        ControllerSnapshot {
            phase,
            selected: None,
            pending: None,
            result: None,
            can_analyze: false,
            last_error: None,
            completed_at: None,
        }
    }

    fn present(snapshot: &ControllerSnapshot) -> DashboardViewModel {
        let store = StaticStore::builtin();
        present_dashboard(snapshot, &store.companies(), &present_charts(&store))
    }

    #[test]
    fn test_idle_dashboard_disables_analyze() {
        let vm = present(&snapshot(Phase::Idle));
        assert!(!vm.analyze_button.enabled);
        assert_eq!(vm.selector.selected, None);
        assert_eq!(vm.selector.options.len(), 3);
        assert_eq!(vm.selector.options[0].label, "Apple Inc (AAPL)");
        assert!(vm.result.is_none());
        assert_eq!(vm.status_bar.phase, "IDLE");
    }

    #[test]
    fn test_selected_index_follows_selection() {
        let mut snap = snapshot(Phase::Selected);
        snap.selected = Some("Google".to_string());
        snap.can_analyze = true;

        let vm = present(&snap);
        assert_eq!(vm.selector.selected, Some(2));
        assert!(vm.analyze_button.enabled);
        assert_eq!(vm.analyze_button.label, "Analyze");
    }

    #[test]
    fn test_busy_dashboard_shows_progress() {
        let mut snap = snapshot(Phase::Busy);
        snap.selected = Some("Microsoft".to_string());
        snap.pending = Some("Microsoft".to_string());

        let vm = present(&snap);
        assert!(!vm.analyze_button.enabled);
        assert!(vm.analyze_button.busy);
        assert_eq!(vm.analyze_button.label, "Analyzing...");
        assert_eq!(vm.status_bar.message, "Analyzing Microsoft...");
        assert_eq!(vm.status_bar.level, StatusLevel::Warning);
    }

    #[test]
    fn test_error_is_surfaced() {
        let mut snap = snapshot(Phase::Selected);
        snap.selected = Some("Initech".to_string());
        snap.last_error = Some("Stock code for Initech not found.".to_string());

        let vm = present(&snap);
        assert_eq!(vm.selector.selected, None);
        assert_eq!(vm.status_bar.level, StatusLevel::Error);
        assert_eq!(vm.error.as_deref(), Some("Stock code for Initech not found."));
    }

    #[test]
    fn test_shown_dashboard_includes_result() {
        let mut snap = snapshot(Phase::Shown);
        snap.result = StaticStore::builtin().get("Apple Inc");

        let vm = present(&snap);
        let result = vm.result.unwrap();
        assert_eq!(result.company_name, "Apple Inc");
        assert_eq!(vm.status_bar.message, "Showing Apple Inc");
    }
}
