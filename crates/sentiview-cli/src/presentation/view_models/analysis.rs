use serde::Serialize;

use super::common::Tone;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisViewModel {
    pub company_name: String,
    pub stock_code: String,
    pub sentiment: SentimentBadgeViewModel,
    pub news_summary: String,
    pub market_implications: String,
    pub confidence: ConfidenceViewModel,
    /// People, places, companies, industries, in that order
    pub entities: Vec<EntityGroupViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentBadgeViewModel {
    pub label: String,
    pub icon: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceViewModel {
    pub score: f64,
    /// Bar fill in `[0, 1]`
    pub ratio: f64,
    /// `round(score * 100)`, in `[0, 100]`
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    People,
    Places,
    Companies,
    Industries,
}

impl EntityKind {
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::People => "Key People",
            EntityKind::Places => "Locations",
            EntityKind::Companies => "Companies",
            EntityKind::Industries => "Industries",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityGroupViewModel {
    pub kind: EntityKind,
    pub title: String,
    pub items: Vec<String>,
}
