use std::path::PathBuf;
use thiserror::Error;

/// Result type for sentiview-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a store
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("dataset contains no analysis records")]
    EmptyDataset,

    #[error("company '{0}' appears more than once in the dataset")]
    DuplicateCompany(String),

    #[error("{chart} entry '{label}' has invalid value {value}")]
    InvalidChartValue {
        chart: &'static str,
        label: String,
        value: f64,
    },

    #[error(transparent)]
    InvalidRecord(#[from] sentiview_types::Error),
}
