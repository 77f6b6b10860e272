use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_charts;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let store = ctx.store()?;
    let charts = present_charts(&*store);

    ConsoleRenderer::new(format == OutputFormat::Json).render(CommandResultViewModel::new(charts))
}
