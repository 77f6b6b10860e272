use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;
use crate::error::{Error, Result};

/// Pre-computed sentiment analysis for one company.
///
/// Records are built once when a store is created and are never mutated;
/// the controller hands out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub company_name: String,
    pub stock_code: String,
    pub news_summary: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub places: Vec<String>,
    #[serde(default)]
    pub related_companies: Vec<String>,
    #[serde(default)]
    pub related_industries: Vec<String>,
    pub market_implications: String,
    pub confidence_score: f64,
}

impl AnalysisRecord {
    /// Check the record invariants: identifying fields are non-blank and the
    /// confidence score lies in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<()> {
        if self.company_name.trim().is_empty() {
            return Err(Error::MissingField {
                company: self.company_name.clone(),
                field: "company_name",
            });
        }
        if self.stock_code.trim().is_empty() {
            return Err(Error::MissingField {
                company: self.company_name.clone(),
                field: "stock_code",
            });
        }
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(Error::InvalidConfidence {
                company: self.company_name.clone(),
                score: self.confidence_score,
            });
        }
        Ok(())
    }
}

/// Selector entry: a company key and its ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub name: String,
    pub stock_code: String,
}

impl From<&AnalysisRecord> for CompanyEntry {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            name: record.company_name.clone(),
            stock_code: record.stock_code.clone(),
        }
    }
}
