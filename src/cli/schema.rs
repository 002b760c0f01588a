use super::{SchemaArgs, SchemaTarget};
use crate::config::Config;
use crate::storage::PlanDocument;
use schemars::schema_for;

pub fn execute(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = match args.target {
        SchemaTarget::Config => schema_for!(Config),
        SchemaTarget::Plan => schema_for!(PlanDocument),
    };
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}
