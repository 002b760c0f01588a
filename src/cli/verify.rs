use super::{ReportFormat, VerifyArgs};
use crate::config::Config;
use crate::output;
use crate::storage;
use crate::verify::Guard;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

pub fn execute(args: VerifyArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let blueprint = storage::load_blueprint(&args.plan, args.team.as_deref())?;

    let guard = Guard::new().ignoring(config.verify.ignore.clone());
    let report = guard.scrutinize(&blueprint);
    info!(
        "Verified '{}': {}",
        blueprint.project.name,
        output::summary_line(&report)
    );

    match args.format {
        ReportFormat::Text => print!("{}", output::render_text(&report)),
        ReportFormat::Json => println!("{}", output::render_json(&report)?),
    }

    // Exit with error when issues reach the configured level
    let fail_on = args.fail_on.unwrap_or(config.verify.fail_on);
    if fail_on.is_reached_by(report.worst_level()) {
        error!("Exiting with error: issues at or above '{}' level", fail_on);
        std::io::stdout().flush()?;
        std::process::exit(1);
    }

    Ok(())
}
