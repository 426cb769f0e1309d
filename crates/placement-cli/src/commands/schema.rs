use placement_core::entities::{Company, Job, SessionUser, Testimonial};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `placement schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_json(args.type_name)?, flags.format)
}

fn schema_json(type_name: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        SchemaType::Job => schema_for!(Job),
        SchemaType::Company => schema_for!(Company),
        SchemaType::Testimonial => schema_for!(Testimonial),
        SchemaType::SessionUser => schema_for!(SessionUser),
    };
    Ok(serde_json::to_value(schema)?)
}
