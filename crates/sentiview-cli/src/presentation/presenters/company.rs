use sentiview_types::CompanyEntry;

use crate::presentation::view_models::{CompanyListViewModel, CompanyOptionViewModel};

pub fn present_company_option(entry: &CompanyEntry) -> CompanyOptionViewModel {
    CompanyOptionViewModel {
        name: entry.name.clone(),
        stock_code: entry.stock_code.clone(),
        label: format!("{} ({})", entry.name, entry.stock_code),
    }
}

pub fn present_companies(entries: &[CompanyEntry]) -> CompanyListViewModel {
    CompanyListViewModel {
        companies: entries.iter().map(present_company_option).collect(),
    }
}
