pub mod config;
pub mod controller;
pub mod error;

pub use config::{
    AnalysisConfig, Config, DataConfig, UiConfig, expand_tilde, resolve_config_path,
};
pub use controller::{
    AnalyzeOutcome, Completion, CompletionReceiver, Controller, ControllerSnapshot, Phase,
};
pub use error::{Error, Result};
