use serde::{Deserialize, Serialize};
use sentiview_types::{AnalysisRecord, ChartDatum, IndustrySentimentDatum};
use std::path::Path;

use crate::builtin;
use crate::error::{Error, Result};

/// On-disk dataset layout (TOML).
///
/// ```toml
/// [[records]]
/// company_name = "Acme"
/// stock_code = "ACME"
/// # ...
///
/// [[distribution]]
/// name = "Positive"
/// value = 50.0
/// color = "#10b981"
///
/// [[industries]]
/// industry = "Tools"
/// score = 70.0
/// ```
///
/// `distribution` and `industries` fall back to the built-in chart data when
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<AnalysisRecord>,
    #[serde(default = "builtin::sentiment_distribution")]
    pub distribution: Vec<ChartDatum>,
    #[serde(default = "builtin::industry_scores")]
    pub industries: Vec<IndustrySentimentDatum>,
}

impl Dataset {
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
            distribution: builtin::sentiment_distribution(),
            industries: builtin::industry_scores(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
