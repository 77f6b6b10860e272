//! Lookup store for sentiview.
//!
//! The store is a read-only mapping from company name to a pre-built
//! [`AnalysisRecord`](sentiview_types::AnalysisRecord), plus the two static
//! chart datasets. Consumers depend on the [`AnalysisSource`] and
//! [`ChartSource`] traits; [`StaticStore`] implements both, over either the
//! compiled-in table or a dataset file.

pub mod builtin;
mod dataset;
pub mod error;
mod source;
mod static_store;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use source::{AnalysisSource, ChartSource};
pub use static_store::StaticStore;
