use crate::{Error, Result};
use sentiview_store::StaticStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LATENCY_MS: u64 = 2000;
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SENTIVIEW_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.sentiview/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SENTIVIEW_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("sentiview").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".sentiview").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_tilde_with(Path::new(path), home.as_deref())
}

fn expand_tilde_with(path: &Path, home: Option<&Path>) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = home
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

/// Tilde-expand `path` and anchor it at `base` when it is still relative
fn resolve_against(path: &Path, base: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = expand_tilde_with(path, home);
    if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Simulated latency of one analysis
    pub latency_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Dataset file replacing the built-in table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval of the dashboard
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub data: DataConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content)?;

        // A relative dataset is relative to the config file, not the cwd
        if let Some(dataset) = config.data.dataset.take() {
            let base = path.parent().unwrap_or(Path::new(""));
            let home = std::env::var_os("HOME").map(PathBuf::from);
            config.data.dataset = Some(resolve_against(&dataset, base, home.as_deref()));
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.analysis.latency_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(1))
    }

    /// Build the lookup store this config points at: the dataset file when
    /// one is configured, otherwise the built-in table.
    pub fn open_store(&self) -> Result<StaticStore> {
        match &self.data.dataset {
            Some(path) => {
                let path = expand_tilde(&path.to_string_lossy());
                Ok(StaticStore::from_dataset_file(&path)?)
            }
            None => Ok(StaticStore::builtin()),
        }
    }
}
