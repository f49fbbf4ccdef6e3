//! Normalize command (fixed-width labels).

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;
use wms_id::{Barcode, PaddingPolicy};

use crate::output::print_output;

use super::CommandContext;

/// Normalize values into fixed-width labels.
#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Raw values to normalize.
    #[arg(required = true)]
    values: Vec<String>,

    /// Fail on values wider than the configured length instead of passing them through.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct NormalizedRow {
    #[tabled(rename = "INPUT")]
    input: String,
    #[tabled(rename = "VALUE")]
    value: String,
    #[tabled(rename = "WIDTH")]
    width: usize,
    #[tabled(rename = "PADDED")]
    padded: bool,
}

impl NormalizeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let policy = ctx.policy.resolve()?;
        let rows = normalize_all(&self.values, &policy, self.strict)?;
        info!(count = rows.len(), %policy, "normalized values");
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn normalize_all(values: &[String], policy: &PaddingPolicy, strict: bool) -> Result<Vec<NormalizedRow>> {
    values
        .iter()
        .map(|raw| {
            if strict && !policy.fits(raw) {
                bail!(
                    "'{}' is {} characters wide, longer than the configured length {}",
                    raw,
                    raw.chars().count(),
                    policy.length()
                );
            }
            let label = Barcode::with_policy(raw, policy);
            Ok(NormalizedRow {
                input: raw.clone(),
                width: label.value().chars().count(),
                padded: label.value() != raw.as_str(),
                value: label.into(),
            })
        })
        .collect()
}
