use anyhow::{Result, anyhow, bail};
use sentiview_runtime::Controller;
use sentiview_store::AnalysisSource;
use std::sync::Arc;
use std::time::Instant;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_analysis;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, ViewMode,
};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

/// Headless run of the dashboard flow: select, analyze, wait, print.
pub fn handle(
    ctx: &ExecutionContext,
    company: &str,
    format: OutputFormat,
    view_mode: ViewMode,
) -> Result<()> {
    let store = ctx.store()?;
    let Some(stock_code) = store.stock_code(company) else {
        bail!("Stock code for {} not found.", company);
    };
    tracing::debug!(company, stock_code, "resolved stock code");

    let latency = ctx.latency()?;
    let source: Arc<dyn AnalysisSource> = store.clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let started = Instant::now();
    let record = runtime.block_on(async {
        let (mut controller, mut rx) = Controller::new(source, latency);
        controller.select(Some(company));
        controller.analyze();
        controller.settle(&mut rx).await;

        match controller.result() {
            Some(record) => Ok(record.clone()),
            None => Err(anyhow!(
                "{}",
                controller
                    .last_error()
                    .unwrap_or("Analysis finished without a result")
            )),
        }
    })?;
    tracing::info!(
        company,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analysis printed"
    );

    let mut result = CommandResultViewModel::new(present_analysis(&record));
    if view_mode == ViewMode::Standard {
        result = result
            .with_badge(StatusBadge::success(format!(
                "Analysis complete: {}",
                record.company_name
            )))
            .with_suggestion(
                Guidance::new("Browse every company interactively")
                    .with_command("sentiview dashboard"),
            );
    }

    let renderer = ConsoleRenderer::new(format == OutputFormat::Json).with_view_mode(view_mode);
    renderer.render(result)
}
