use std::fmt;

use crate::presentation::formatters::paint;
use crate::presentation::view_models::{CompanyListViewModel, CreateView, ViewMode};

impl CreateView for CompanyListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            ViewMode::Compact => Box::new(CompactCompanyListView { data: self }),
            ViewMode::Standard => Box::new(CompanyListView { data: self }),
        }
    }
}

struct CompanyListView<'a> {
    data: &'a CompanyListViewModel,
}

impl<'a> fmt::Display for CompanyListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.companies.is_empty() {
            return writeln!(f, "No companies available.");
        }

        let width = self
            .data
            .companies
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("COMPANY".len());

        writeln!(f, "{:<width$}  CODE", "COMPANY", width = width)?;
        writeln!(f, "{}", "-".repeat(width + 8))?;
        for company in &self.data.companies {
            writeln!(
                f,
                "{:<width$}  {}",
                company.name,
                paint::accent(&company.stock_code),
                width = width
            )?;
        }
        Ok(())
    }
}

struct CompactCompanyListView<'a> {
    data: &'a CompanyListViewModel,
}

impl<'a> fmt::Display for CompactCompanyListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for company in &self.data.companies {
            writeln!(f, "{}", company.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_companies;
    use sentiview_store::{AnalysisSource, StaticStore};

    #[test]
    fn test_table_has_header_and_rows() {
        let vm = present_companies(&StaticStore::builtin().companies());
        let out = vm.create_view(ViewMode::Standard).to_string();

        assert!(out.starts_with("COMPANY"));
        assert!(out.contains("Microsoft"));
        assert!(out.contains("GOOGL"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn test_compact_uses_labels() {
        let vm = present_companies(&StaticStore::builtin().companies());
        let out = vm.create_view(ViewMode::Compact).to_string();
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["Apple Inc (AAPL)", "Microsoft (MSFT)", "Google (GOOGL)"]
        );
    }
}
