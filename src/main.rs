use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wbsplan::cli::{self, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("wbsplan=debug")
    } else {
        EnvFilter::new("wbsplan=warn")
    };

    // Reports go to stdout, so logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Verify(args) => cli::verify::execute(args, &cli.config),
        Commands::Gantt(args) => cli::gantt::execute(args, &cli.config),
        Commands::Schema(args) => cli::schema::execute(args),
    }
}
