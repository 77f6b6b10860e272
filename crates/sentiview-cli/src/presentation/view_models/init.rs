use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InitViewModel {
    pub config_path: String,
    pub created: bool,
    pub latency_ms: u64,
    pub dataset: Option<String>,
}
