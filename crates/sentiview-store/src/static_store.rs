use sentiview_types::{AnalysisRecord, ChartDatum, CompanyEntry, IndustrySentimentDatum};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::source::{AnalysisSource, ChartSource};

/// In-memory lookup store, populated once and never mutated.
///
/// Records keep their dataset order, which is the order the selector lists
/// them in.
#[derive(Debug, Clone)]
pub struct StaticStore {
    records: Vec<AnalysisRecord>,
    index: HashMap<String, usize>,
    distribution: Vec<ChartDatum>,
    industries: Vec<IndustrySentimentDatum>,
}

impl StaticStore {
    /// Store over the compiled-in dataset
    pub fn builtin() -> Self {
        // Built-in records are checked in builtin::tests.
        Self::index_unchecked(Dataset::builtin())
    }

    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        if dataset.records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut seen = HashSet::new();
        for record in &dataset.records {
            record.validate()?;
            if !seen.insert(record.company_name.as_str()) {
                return Err(Error::DuplicateCompany(record.company_name.clone()));
            }
        }

        // Chart values must be finite and non-negative
        let distribution = dataset
            .distribution
            .iter()
            .map(|d| ("distribution", &d.name, d.value));
        let industries = dataset
            .industries
            .iter()
            .map(|d| ("industries", &d.industry, d.score));
        if let Some((chart, label, value)) = distribution
            .chain(industries)
            .find(|&(_, _, value)| !value.is_finite() || value < 0.0)
        {
            return Err(Error::InvalidChartValue {
                chart,
                label: label.clone(),
                value,
            });
        }

        Ok(Self::index_unchecked(dataset))
    }

    pub fn from_dataset_file(path: &Path) -> Result<Self> {
        let dataset = Dataset::load_from(path)?;
        let store = Self::from_dataset(dataset)?;
        tracing::debug!(
            path = %path.display(),
            companies = store.len(),
            "loaded dataset file"
        );
        Ok(store)
    }

    fn index_unchecked(dataset: Dataset) -> Self {
        let index = dataset
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.company_name.clone(), i))
            .collect();

        Self {
            records: dataset.records,
            index,
            distribution: dataset.distribution,
            industries: dataset.industries,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing lookup
    pub fn record(&self, company_name: &str) -> Option<&AnalysisRecord> {
        self.index.get(company_name).map(|&i| &self.records[i])
    }

    /// Ticker for a company, if the store knows it
    pub fn stock_code(&self, company_name: &str) -> Option<&str> {
        self.record(company_name).map(|r| r.stock_code.as_str())
    }
}

impl Default for StaticStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AnalysisSource for StaticStore {
    fn companies(&self) -> Vec<CompanyEntry> {
        self.records.iter().map(CompanyEntry::from).collect()
    }

    fn get(&self, company_name: &str) -> Option<AnalysisRecord> {
        self.record(company_name).cloned()
    }
}

impl ChartSource for StaticStore {
    fn sentiment_distribution(&self) -> Vec<ChartDatum> {
        self.distribution.clone()
    }

    fn industry_scores(&self) -> Vec<IndustrySentimentDatum> {
        self.industries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use sentiview_types::Sentiment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ACME_DATASET: &str = r#"
[[records]]
company_name = "Acme"
stock_code = "ACME"
news_summary = "Acme ships anvils."
sentiment = "Negative"
market_implications = "Supply glut."
confidence_score = 0.4

[[industries]]
industry = "Tools"
score = 70.0
"#;

    fn write_dataset(content: &str) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_builtin_companies_in_store_order() {
        let store = StaticStore::builtin();
        let names: Vec<_> = store.companies().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Apple Inc", "Microsoft", "Google"]);
    }

    #[test]
    fn test_get_is_total_over_key_set() {
        let store = StaticStore::builtin();
        for entry in store.companies() {
            let record = store.get(&entry.name).expect("key from companies()");
            assert_eq!(record.company_name, entry.name);
            assert_eq!(record.stock_code, entry.stock_code);
        }
    }

    #[test]
    fn test_get_unknown_company_is_absent() {
        let store = StaticStore::builtin();
        assert!(store.get("Initech").is_none());
        assert!(store.get("").is_none());
        assert!(store.stock_code("Initech").is_none());
    }

    #[test]
    fn test_apple_record_matches_reference() {
        let store = StaticStore::builtin();
        let apple = store.get("Apple Inc").unwrap();
        assert_eq!(apple.stock_code, "AAPL");
        assert_eq!(apple.sentiment, Sentiment::Positive);
        assert_eq!(apple.people.len(), 2);
        assert_eq!(apple.places.len(), 3);
        assert_eq!(apple.related_companies.len(), 3);
        assert_eq!(apple.related_industries.len(), 4);
        assert_eq!(apple.confidence_score, 0.87);
    }

    #[test]
    fn test_stock_code_lookup() {
        let store = StaticStore::builtin();
        assert_eq!(store.stock_code("Google"), Some("GOOGL"));
        assert_eq!(store.stock_code("Microsoft"), Some("MSFT"));
    }

    #[test]
    fn test_negative_industry_score_is_rejected() -> Result<()> {
        let content =
            format!("{ACME_DATASET}\n[[industries]]\nindustry = \"Retail\"\nscore = -5.0\n");
        let file = write_dataset(&content)?;

        let err = StaticStore::from_dataset_file(file.path()).unwrap_err();
        match err {
            Error::InvalidChartValue { chart, label, value } => {
                assert_eq!(chart, "industries");
                assert_eq!(label, "Retail");
                assert_eq!(value, -5.0);
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[test]
    fn test_nan_distribution_value_is_rejected() {
        let mut dataset = Dataset::builtin();
        dataset.distribution[1].value = f64::NAN;

        let err = StaticStore::from_dataset(dataset).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidChartValue { chart: "distribution", .. }
        ));
    }

    #[test]
    fn test_zero_chart_values_are_accepted() -> Result<()> {
        let mut dataset = Dataset::builtin();
        dataset.industries[0].score = 0.0;
        let store = StaticStore::from_dataset(dataset)?;
        assert_eq!(store.industry_scores()[0].score, 0.0);
        Ok(())
    }

    #[test]
    fn test_from_dataset_file() -> Result<()> {
        let file = write_dataset(ACME_DATASET)?;
        let store = StaticStore::from_dataset_file(file.path())?;

        assert_eq!(store.len(), 1);
        assert_eq!(store.stock_code("Acme"), Some("ACME"));
        assert_eq!(store.industry_scores().len(), 1);
        assert_eq!(store.sentiment_distribution().len(), 3);
        Ok(())
    }

    #[test]
    fn test_rejects_duplicate_company() -> Result<()> {
        let mut dataset = Dataset::builtin();
        dataset.records.push(dataset.records[0].clone());

        let err = StaticStore::from_dataset(dataset).unwrap_err();
        assert!(matches!(err, Error::DuplicateCompany(name) if name == "Apple Inc"));
        Ok(())
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let mut dataset = Dataset::builtin();
        dataset.records[1].confidence_score = 1.5;

        let err = StaticStore::from_dataset(dataset).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn test_rejects_empty_dataset() {
        let mut dataset = Dataset::builtin();
        dataset.records.clear();
        assert!(matches!(
            StaticStore::from_dataset(dataset),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = StaticStore::from_dataset_file(Path::new("/nonexistent/dataset.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() -> Result<()> {
        let file = write_dataset("records = 3")?;
        let err = StaticStore::from_dataset_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        Ok(())
    }
}
