use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyListViewModel {
    pub companies: Vec<CompanyOptionViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyOptionViewModel {
    pub name: String,
    pub stock_code: String,
    /// "Apple Inc (AAPL)"
    pub label: String,
}
