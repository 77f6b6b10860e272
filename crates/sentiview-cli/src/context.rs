use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use sentiview_runtime::{Config, expand_tilde, resolve_config_path};
use sentiview_store::StaticStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dataset: Option<PathBuf>,
    pub latency_ms: Option<u64>,
}

impl Overrides {
    /// A `--dataset` path is made absolute against the cwd, so a config
    /// written from it keeps working from any directory.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dataset) = &self.dataset {
            let dataset = expand_tilde(&dataset.to_string_lossy());
            let dataset = std::path::absolute(&dataset).unwrap_or(dataset);
            config.data.dataset = Some(dataset);
        }
        if let Some(latency_ms) = self.latency_ms {
            config.analysis.latency_ms = latency_ms;
        }
    }
}

/// Lazily loaded config and store shared by the handlers
pub struct ExecutionContext {
    config_path: PathBuf,
    overrides: Overrides,
    config: OnceCell<Config>,
    store: OnceCell<Arc<StaticStore>>,
}

impl ExecutionContext {
    pub fn new(config_path: Option<&str>, overrides: Overrides) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;

        Ok(Self {
            config_path,
            overrides,
            config: OnceCell::new(),
            store: OnceCell::new(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Config file merged with command-line overrides
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let mut config = Config::load_from(&self.config_path).with_context(|| {
                format!("Failed to load config from {}", self.config_path.display())
            })?;
            self.overrides.apply(&mut config);
            Ok(config)
        })
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn store(&self) -> Result<Arc<StaticStore>> {
        let store = self.store.get_or_try_init(|| -> Result<_> {
            let store = self.config()?.open_store().context("Failed to open dataset")?;
            Ok(Arc::new(store))
        })?;
        Ok(Arc::clone(store))
    }

    pub fn latency(&self) -> Result<Duration> {
        Ok(self.config()?.latency())
    }

    pub fn tick_rate(&self) -> Result<Duration> {
        Ok(self.config()?.tick_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_take_precedence() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analysis]\nlatency_ms = 500\n")?;

        let path_str = config_path.to_string_lossy().to_string();
        let ctx = ExecutionContext::new(
            Some(&path_str),
            Overrides {
                dataset: None,
                latency_ms: Some(0),
            },
        )?;
        assert_eq!(ctx.latency()?, Duration::ZERO);
        Ok(())
    }

    #[test]
    fn test_dataset_override_becomes_absolute() {
        let overrides = Overrides {
            dataset: Some(PathBuf::from("data.toml")),
            latency_ms: None,
        };
        let mut config = Config::default();
        overrides.apply(&mut config);

        let dataset = config.data.dataset.expect("dataset override applied");
        assert!(dataset.is_absolute());
        assert!(dataset.ends_with("data.toml"));
    }

    #[test]
    fn test_config_file_values_apply_without_overrides() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analysis]\nlatency_ms = 500\n")?;

        let path_str = config_path.to_string_lossy().to_string();
        let ctx = ExecutionContext::new(Some(&path_str), Overrides::default())?;
        assert_eq!(ctx.latency()?, Duration::from_millis(500));
        assert_eq!(ctx.store()?.len(), 3);
        Ok(())
    }
}
