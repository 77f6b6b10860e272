use sentiview_types::{AnalysisRecord, Sentiment};

use crate::presentation::view_models::{
    AnalysisViewModel, ConfidenceViewModel, EntityGroupViewModel, EntityKind,
    SentimentBadgeViewModel, Tone,
};

/// Map a sentiment onto its badge.
///
/// Only `Positive` and `Negative` get their own presentation. `Neutral` and
/// any label this build does not recognize share the neutral badge.
pub fn present_sentiment(sentiment: &Sentiment) -> SentimentBadgeViewModel {
    let (icon, tone) = match sentiment {
        Sentiment::Positive => ("▲", Tone::Positive),
        Sentiment::Negative => ("▼", Tone::Negative),
        Sentiment::Neutral | Sentiment::Unrecognized(_) => ("▬", Tone::Neutral),
    };

    SentimentBadgeViewModel {
        label: sentiment.label().to_string(),
        icon,
        tone,
    }
}

pub fn present_confidence(score: f64) -> ConfidenceViewModel {
    let ratio = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
    ConfidenceViewModel {
        score,
        ratio,
        percent: (ratio * 100.0).round() as u8,
    }
}

pub fn present_analysis(record: &AnalysisRecord) -> AnalysisViewModel {
    let group = |kind: EntityKind, items: &[String]| EntityGroupViewModel {
        kind,
        title: kind.title().to_string(),
        items: items.to_vec(),
    };

    AnalysisViewModel {
        company_name: record.company_name.clone(),
        stock_code: record.stock_code.clone(),
        sentiment: present_sentiment(&record.sentiment),
        news_summary: record.news_summary.clone(),
        market_implications: record.market_implications.clone(),
        confidence: present_confidence(record.confidence_score),
        entities: vec![
            group(EntityKind::People, &record.people),
            group(EntityKind::Places, &record.places),
            group(EntityKind::Companies, &record.related_companies),
            group(EntityKind::Industries, &record.related_industries),
        ],
    }
}
