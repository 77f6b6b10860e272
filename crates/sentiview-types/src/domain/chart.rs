use serde::{Deserialize, Serialize};

/// One slice of the sentiment distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    /// Sentiment label of the slice
    pub name: String,
    pub value: f64,
    /// Hex color, e.g. `#10b981`
    pub color: String,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

/// One bar of the industry sentiment chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustrySentimentDatum {
    pub industry: String,
    pub score: f64,
}

impl IndustrySentimentDatum {
    pub fn new(industry: impl Into<String>, score: f64) -> Self {
        Self {
            industry: industry.into(),
            score,
        }
    }
}
