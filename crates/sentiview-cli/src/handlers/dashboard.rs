use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use sentiview_runtime::Controller;
use sentiview_store::AnalysisSource;
use std::sync::Arc;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_charts;
use crate::presentation::renderers::{DashboardApp, TuiRenderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("The dashboard needs a terminal; try 'sentiview analyze <COMPANY>' instead");
    }

    let store = ctx.store()?;
    let charts = present_charts(&*store);
    let latency = ctx.latency()?;
    let tick_rate = ctx.tick_rate()?;
    let source: Arc<dyn AnalysisSource> = store;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    tracing::info!(latency_ms = latency.as_millis() as u64, "dashboard starting");
    runtime.block_on(async move {
        let (controller, rx) = Controller::new(source, latency);
        let app = DashboardApp::new(controller, charts);
        TuiRenderer::new(tick_rate).run(app, rx).await
    })
}
