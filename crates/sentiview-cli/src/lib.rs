// NOTE: sentiview Architecture
//
// Crate layering:
// - sentiview-types: domain records, sentiment labels, chart data
// - sentiview-store: read-only lookup store behind AnalysisSource / ChartSource
// - sentiview-runtime: config + the analysis controller (state machine, latency task)
// - sentiview (this crate): CLI, presenters, console and TUI renderers
//
// The controller never touches the terminal. The TUI event loop owns the
// controller and its completion receiver; presenters turn controller
// snapshots into view models and the ratatui views draw those.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
