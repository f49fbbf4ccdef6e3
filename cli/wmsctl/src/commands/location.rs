//! Location commands (location key parsing).

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use wms_id::LocationPk;

use crate::output::print_output;

use super::CommandContext;

/// Parse location keys.
#[derive(Debug, Args)]
pub struct LocationCommand {
    /// Location keys in the form AREA/AISLE/X/Y/Z.
    #[arg(required = true)]
    keys: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct LocationRow {
    #[tabled(rename = "KEY")]
    key: LocationPk,
    #[tabled(rename = "AREA")]
    area: String,
    #[tabled(rename = "AISLE")]
    aisle: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
    #[tabled(rename = "Z")]
    z: String,
}

impl From<LocationPk> for LocationRow {
    fn from(pk: LocationPk) -> Self {
        Self {
            area: pk.area().to_string(),
            aisle: pk.aisle().to_string(),
            x: pk.x().to_string(),
            y: pk.y().to_string(),
            z: pk.z().to_string(),
            key: pk,
        }
    }
}

impl LocationCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = parse_all(&self.keys)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn parse_all(keys: &[String]) -> Result<Vec<LocationRow>> {
    keys.iter()
        .map(|key| {
            LocationPk::parse(key)
                .map(LocationRow::from)
                .with_context(|| format!("Invalid location key '{key}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        let rows = parse_all(&["FGIN/0001/0002/0003/0004".to_string()]).unwrap();
        assert_eq!(rows[0].area, "FGIN");
        assert_eq!(rows[0].z, "0004");
        assert_eq!(rows[0].key.to_string(), "FGIN/0001/0002/0003/0004");
    }

    #[test]
    fn test_parse_all_reports_bad_key() {
        let err = parse_all(&["A/B".to_string()]).unwrap_err();
        assert!(err.to_string().contains("A/B"));
    }
}
