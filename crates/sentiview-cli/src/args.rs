use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentiview")]
#[command(about = "Browse company market sentiment snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: XDG config dir)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Dataset file replacing the built-in table")]
    pub dataset: Option<PathBuf>,

    #[arg(long, global = true, help = "Simulated analysis latency in milliseconds")]
    pub latency_ms: Option<u64>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard")]
    Dashboard,

    #[command(about = "List companies available for analysis")]
    Companies {
        #[arg(long, help = "One line per company")]
        compact: bool,
    },

    #[command(about = "Analyze one company and print the result")]
    Analyze {
        #[arg(help = "Company name as listed by 'companies'")]
        company: String,

        #[arg(long, help = "One-line summary instead of the full card")]
        compact: bool,
    },

    #[command(about = "Show the market sentiment charts")]
    Charts,

    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
