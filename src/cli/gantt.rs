use super::GanttArgs;
use crate::config::Config;
use crate::gantt::GanttPainter;
use crate::output;
use crate::storage;
use std::path::Path;
use tracing::info;

pub fn execute(args: GanttArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let blueprint = storage::load_blueprint(&args.plan, args.team.as_deref())?;

    let painter = GanttPainter::new(config.layout.clone());
    let figure = painter.draw(&blueprint);

    let target = args.output.unwrap_or(config.gantt.output);
    output::write_gantt(&figure, &target)?;
    info!("Gantt diagram written to {}", target.display());
    println!("{}", target.display());
    Ok(())
}
