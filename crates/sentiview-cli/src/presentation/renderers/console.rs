use anyhow::Result;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            view_mode: ViewMode::default(),
        }
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!(
                "{} {}",
                badge.icon(),
                badge.label.if_supports_color(Stdout, |t| t.bold())
            );
            println!();
        }

        print!("{}", result.content.create_view(self.view_mode));

        if !result.suggestions.is_empty() {
            println!(
                "\n{}",
                "Tips:".if_supports_color(Stdout, |t| t.yellow())
            );
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.if_supports_color(Stdout, |t| t.cyan()));
                }
                println!();
            }
        }

        Ok(())
    }
}
