//! Policy command (effective padding policy).

use anyhow::Result;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

pub fn show(ctx: CommandContext) -> Result<()> {
    let policy = ctx.policy.resolve()?;

    match ctx.format {
        OutputFormat::Json => print_single(&policy),
        OutputFormat::Table => {
            println!("length: {}", policy.length());
            println!("padded: {}", policy.is_padded());
            println!("padder: '{}'", policy.pad_char());
            println!("alignment: {}", policy.alignment());
        }
    }

    Ok(())
}
