//! Console views (`CreateView` impls) and the ratatui widgets under `tui/`.

mod analysis;
mod charts;
mod company;
mod init;
pub mod tui;
