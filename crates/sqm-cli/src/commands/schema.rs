use schemars::schema_for;
use sqm_core::Marker;
use sqm_core::responses::{AddResponse, ClearResponse, ImportResponse, StatusResponse};

use crate::cli::root_commands::{SchemaArgs, SchemaType};

/// Handle `sqm schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args.type_name)?);
    Ok(())
}

fn render(type_name: SchemaType) -> anyhow::Result<String> {
    let schema = match type_name {
        SchemaType::Marker => schema_for!(Marker),
        SchemaType::AddResponse => schema_for!(AddResponse),
        SchemaType::ImportResponse => schema_for!(ImportResponse),
        SchemaType::ClearResponse => schema_for!(ClearResponse),
        SchemaType::StatusResponse => schema_for!(StatusResponse),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
