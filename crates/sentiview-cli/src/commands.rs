use super::args::{Cli, Commands};
use super::handlers;
use crate::context::{ExecutionContext, Overrides};
use crate::logging::{self, LogTarget};
use crate::presentation::presenters::present_companies;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge, ViewMode};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use sentiview_store::AnalysisSource;

pub fn run(cli: Cli) -> Result<()> {
    let interactive_default = cli.command.is_none() && std::io::stdout().is_terminal();
    let interactive = matches!(cli.command, Some(Commands::Dashboard)) || interactive_default;

    logging::init(
        cli.log_level,
        LogTarget::for_command(cli.log_file.clone(), interactive),
    )?;

    let ctx = ExecutionContext::new(
        cli.config.as_deref(),
        Overrides {
            dataset: cli.dataset.clone(),
            latency_ms: cli.latency_ms,
        },
    )?;
    tracing::debug!(config = %ctx.config_path().display(), "resolved config path");

    let Some(command) = cli.command else {
        if interactive_default {
            return handlers::dashboard::handle(&ctx);
        }
        return show_guidance(&ctx, cli.format);
    };

    match command {
        Commands::Dashboard => handlers::dashboard::handle(&ctx),

        Commands::Companies { compact } => {
            handlers::companies::handle(&ctx, cli.format, view_mode(compact))
        }

        Commands::Analyze { company, compact } => {
            handlers::analyze::handle(&ctx, &company, cli.format, view_mode(compact))
        }

        Commands::Charts => handlers::charts::handle(&ctx, cli.format),

        Commands::Init { force } => handlers::init::handle(&ctx, force, cli.format),
    }
}

fn view_mode(compact: bool) -> ViewMode {
    if compact {
        ViewMode::Compact
    } else {
        ViewMode::Standard
    }
}

/// Shown when no subcommand is given and stdout is not a terminal
fn show_guidance(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let store = ctx.store()?;
    let result = CommandResultViewModel::new(present_companies(&store.companies()))
        .with_badge(StatusBadge::info("sentiview - company market sentiment"))
        .with_suggestion(
            Guidance::new("Analyze a company").with_command("sentiview analyze \"Apple Inc\""),
        )
        .with_suggestion(Guidance::new("Show the charts").with_command("sentiview charts"))
        .with_suggestion(
            Guidance::new("Open the dashboard from a terminal")
                .with_command("sentiview dashboard"),
        );

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
