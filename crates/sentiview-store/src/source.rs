use sentiview_types::{AnalysisRecord, ChartDatum, CompanyEntry, IndustrySentimentDatum};

/// Read-only access to analysis records keyed by company name.
///
/// `get` must be deterministic and side-effect free. `None` means "no such
/// company"; callers that only pass keys taken from `companies()` never see
/// it with the built-in store.
pub trait AnalysisSource: Send + Sync {
    /// Selector entries in store order
    fn companies(&self) -> Vec<CompanyEntry>;

    fn get(&self, company_name: &str) -> Option<AnalysisRecord>;
}

/// Static datasets behind the two dashboard charts
pub trait ChartSource: Send + Sync {
    fn sentiment_distribution(&self) -> Vec<ChartDatum>;

    fn industry_scores(&self) -> Vec<IndustrySentimentDatum>;
}
