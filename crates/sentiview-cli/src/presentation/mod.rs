//! # Presentation Layer
//!
//! Same MVVM split for the console commands and the dashboard:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer / View ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts. No logic.
//! * `presenters/`: pure functions from domain data and controller snapshots
//!   to view models. Sentiment styling, confidence rounding and chart shares
//!   are decided here.
//! * `views/`: console `Display` views and ratatui widgets. Layout and color
//!   only.
//! * `renderers/`: console/JSON output and the dashboard event loop.
//! * `formatters/`: small shared helpers (bars, hex colors, console paint).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
