use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment classification attached to an analysis record.
///
/// The three known labels have dedicated variants. Any other label is kept
/// verbatim in `Unrecognized` so that a data source emitting a label this
/// build does not know about still loads; presentation treats it like
/// `Neutral`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unrecognized(String),
}

impl Sentiment {
    /// Parse a label. Total: unknown labels become `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Sentiment::Positive,
            "Negative" => Sentiment::Negative,
            "Neutral" => Sentiment::Neutral,
            other => Sentiment::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Unrecognized(label) => label,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for Sentiment {
    fn from(label: String) -> Self {
        Sentiment::from_label(&label)
    }
}

impl From<&str> for Sentiment {
    fn from(label: &str) -> Self {
        Sentiment::from_label(label)
    }
}

impl From<Sentiment> for String {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_parse_to_variants() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("Negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("Neutral"), Sentiment::Neutral);
    }

    #[test]
    fn test_unknown_label_is_preserved() {
        let sentiment = Sentiment::from_label("Bullish");
        assert_eq!(sentiment, Sentiment::Unrecognized("Bullish".to_string()));
        assert_eq!(sentiment.label(), "Bullish");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(matches!(
            Sentiment::from_label("positive"),
            Sentiment::Unrecognized(_)
        ));
    }

    #[test]
    fn test_serde_uses_plain_label() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"Negative\"");

        let parsed: Sentiment = serde_json::from_str("\"Mixed\"").unwrap();
        assert_eq!(parsed, Sentiment::Unrecognized("Mixed".to_string()));
    }
}
