//! Compiled-in dataset shipped with the dashboard.

use sentiview_types::{AnalysisRecord, ChartDatum, IndustrySentimentDatum, Sentiment};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Analysis records in selector order
pub fn records() -> Vec<AnalysisRecord> {
    vec![
        AnalysisRecord {
            company_name: "Apple Inc".to_string(),
            stock_code: "AAPL".to_string(),
            news_summary: "Apple announces record quarterly earnings driven by strong iPhone 15 \
                           sales and services growth. The company also unveiled new AI features \
                           for iOS 18."
                .to_string(),
            sentiment: Sentiment::Positive,
            people: strings(&["Tim Cook", "Luca Maestri"]),
            places: strings(&["Cupertino", "China", "Europe"]),
            related_companies: strings(&["Samsung", "Google", "Microsoft"]),
            related_industries: strings(&[
                "Technology",
                "Consumer Electronics",
                "Software",
                "Artificial Intelligence",
            ]),
            market_implications: "Strong earnings beat expectations, likely to drive stock price \
                                  higher. AI integration positions Apple well for future growth."
                .to_string(),
            confidence_score: 0.87,
        },
        AnalysisRecord {
            company_name: "Microsoft".to_string(),
            stock_code: "MSFT".to_string(),
            news_summary: "Microsoft reports strong cloud growth with Azure revenue up 30% \
                           year-over-year. Copilot AI integration across Office suite shows \
                           promising adoption rates."
                .to_string(),
            sentiment: Sentiment::Positive,
            people: strings(&["Satya Nadella", "Amy Hood"]),
            places: strings(&["Redmond", "United States", "Global"]),
            related_companies: strings(&["Amazon", "Google", "OpenAI"]),
            related_industries: strings(&[
                "Cloud Computing",
                "Software",
                "Artificial Intelligence",
                "Enterprise Solutions",
            ]),
            market_implications: "Azure growth continues to outpace competitors. AI integration \
                                  creating new revenue streams and competitive advantages."
                .to_string(),
            confidence_score: 0.92,
        },
        AnalysisRecord {
            company_name: "Google".to_string(),
            stock_code: "GOOGL".to_string(),
            news_summary: "Alphabet faces regulatory challenges in Europe over search monopoly \
                           concerns. However, Google Cloud shows strong growth and Bard AI gains \
                           market traction."
                .to_string(),
            sentiment: Sentiment::Neutral,
            people: strings(&["Sundar Pichai", "Ruth Porat"]),
            places: strings(&["Mountain View", "Europe", "Brussels"]),
            related_companies: strings(&["Microsoft", "Amazon", "Apple"]),
            related_industries: strings(&[
                "Search",
                "Cloud Computing",
                "Artificial Intelligence",
                "Digital Advertising",
            ]),
            market_implications: "Regulatory headwinds may impact search revenue, but cloud and \
                                  AI growth provide positive offset. Mixed signals for near-term \
                                  performance."
                .to_string(),
            confidence_score: 0.74,
        },
    ]
}

/// Market-wide sentiment split. Illustrative; not derived from `records()`.
pub fn sentiment_distribution() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Positive", 45.0, "#10b981"),
        ChartDatum::new("Neutral", 35.0, "#f59e0b"),
        ChartDatum::new("Negative", 20.0, "#ef4444"),
    ]
}

/// Per-industry sentiment scores, in display order
pub fn industry_scores() -> Vec<IndustrySentimentDatum> {
    vec![
        IndustrySentimentDatum::new("Technology", 85.0),
        IndustrySentimentDatum::new("Healthcare", 72.0),
        IndustrySentimentDatum::new("Finance", 58.0),
        IndustrySentimentDatum::new("Energy", 45.0),
        IndustrySentimentDatum::new("Retail", 63.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_records_are_valid() {
        for record in records() {
            record.validate().unwrap();
        }
    }

    #[test]
    fn test_distribution_sums_to_hundred_with_distinct_colors() {
        let data = sentiment_distribution();
        let total: f64 = data.iter().map(|d| d.value).sum();
        assert_eq!(total, 100.0);

        let mut colors: Vec<_> = data.iter().map(|d| d.color.as_str()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_industry_order_is_fixed() {
        let names: Vec<_> = industry_scores().into_iter().map(|d| d.industry).collect();
        assert_eq!(
            names,
            vec!["Technology", "Healthcare", "Finance", "Energy", "Retail"]
        );
    }
}
