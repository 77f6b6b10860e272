use std::fmt;

use crate::presentation::view_models::{CreateView, InitViewModel, ViewMode};

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView { data: self })
    }
}

struct InitView<'a> {
    data: &'a InitViewModel,
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config:   {}", self.data.config_path)?;
        writeln!(f, "Latency:  {} ms", self.data.latency_ms)?;
        writeln!(
            f,
            "Dataset:  {}",
            self.data.dataset.as_deref().unwrap_or("built-in")
        )
    }
}
