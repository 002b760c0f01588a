pub mod gantt;
pub mod schema;
pub mod verify;

use crate::config::FailLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wbsplan")]
#[command(
    author,
    version,
    about = "Consistency checks and Gantt diagrams for work-breakdown structures"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (defaults apply when it does not exist)
    #[arg(short, long, global = true, default_value = "wbsplan.yaml", env = "WBSPLAN_CONFIG")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a plan for inconsistencies
    Verify(VerifyArgs),

    /// Draw the Gantt diagram of a plan as SVG
    Gantt(GanttArgs),

    /// Print JSON Schema for the config or plan files
    Schema(SchemaArgs),
}

#[derive(Parser, Clone)]
pub struct VerifyArgs {
    /// Plan file (.json, .yaml or .yml)
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Team file, replacing any team found in the plan
    #[arg(long)]
    pub team: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Override the level from which the exit status is 1
    #[arg(long, value_enum)]
    pub fail_on: Option<FailLevel>,
}

#[derive(Parser, Clone)]
pub struct GanttArgs {
    /// Plan file (.json, .yaml or .yml)
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Team file, replacing any team found in the plan
    #[arg(long)]
    pub team: Option<PathBuf>,

    /// Override the SVG file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct SchemaArgs {
    /// Which document to describe
    #[arg(value_enum, default_value_t = SchemaTarget::Config)]
    pub target: SchemaTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    Config,
    Plan,
}
