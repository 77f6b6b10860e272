//! Shared fixture for the CLI integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ACME_DATASET: &str = r#"
[[records]]
company_name = "Acme"
stock_code = "ACME"
news_summary = "Acme recalls its rocket skates after a string of incidents."
sentiment = "Negative"
people = ["Wile E. Coyote"]
places = ["Arizona"]
related_companies = ["Roadrunner Logistics"]
related_industries = ["Consumer Goods"]
market_implications = "Near-term pressure on margins."
confidence_score = 0.61
"#;

pub struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("sentiview").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Command with an isolated config file and no simulated latency
    pub fn command(&self) -> Command {
        self.command_with_latency(0)
    }

    pub fn command_with_latency(&self, latency_ms: u64) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sentiview");
        cmd.env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config_path)
            .arg("--latency-ms")
            .arg(latency_ms.to_string());
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Run with `--format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run sentiview");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
