use anyhow::{Context, Result};
use sentiview_runtime::Config;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_init;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, force: bool, format: OutputFormat) -> Result<()> {
    let config_path = ctx.config_path();

    if config_path.exists() && !force {
        let existing = Config::load_from(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        let result = CommandResultViewModel::new(present_init(config_path, &existing, false))
            .with_badge(StatusBadge::warning("Config already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults").with_command("sentiview init --force"),
            );
        return ConsoleRenderer::new(format == OutputFormat::Json).render(result);
    }

    let mut config = Config::default();
    ctx.overrides().apply(&mut config);
    config
        .save_to(config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "config written");

    let result = CommandResultViewModel::new(present_init(config_path, &config, true))
        .with_badge(StatusBadge::success("Config written"))
        .with_suggestion(Guidance::new("Open the dashboard").with_command("sentiview"));
    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
