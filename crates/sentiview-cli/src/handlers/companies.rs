use anyhow::Result;
use sentiview_store::AnalysisSource;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_companies;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, ViewMode,
};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat, view_mode: ViewMode) -> Result<()> {
    let store = ctx.store()?;
    let list = present_companies(&store.companies());

    let mut result = CommandResultViewModel::new(list);
    if view_mode == ViewMode::Standard {
        result = result.with_badge(StatusBadge::info(format!(
            "{} companies available",
            store.len()
        )));
        if let Some(first) = result.content.companies.first() {
            let command = format!("sentiview analyze \"{}\"", first.name);
            result = result
                .with_suggestion(Guidance::new("Analyze a company").with_command(command));
        }
    }

    ConsoleRenderer::new(format == OutputFormat::Json)
        .with_view_mode(view_mode)
        .render(result)
}
