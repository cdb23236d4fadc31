use anyhow::Context;
use concord_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `concord schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let rendered = match args.type_name.as_deref() {
        Some(name) if !args.list => {
            let schema = registry.get(name).with_context(|| {
                format!(
                    "unknown schema '{name}' (available: {})",
                    registry.list().join(", ")
                )
            })?;
            output::render(schema, flags.format)?
        }
        _ => output::render(&registry.list(), flags.format)?,
    };

    println!("{rendered}");
    Ok(())
}
