use sentiview_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::InitViewModel;

pub fn present_init(config_path: &Path, config: &Config, created: bool) -> InitViewModel {
    InitViewModel {
        config_path: config_path.display().to_string(),
        created,
        latency_ms: config.analysis.latency_ms,
        dataset: config
            .data
            .dataset
            .as_ref()
            .map(|p| p.display().to_string()),
    }
}
