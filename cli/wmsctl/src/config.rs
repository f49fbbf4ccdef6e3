//! Effective padding policy for a CLI invocation.
//!
//! The base policy comes from `--policy FILE` when given, otherwise from the
//! `WMS_ID_*` environment variables. Flags are applied on top.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;
use wms_id::{Alignment, PaddingPolicy};

use crate::error::CliError;

/// Padding policy overrides shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PolicyArgs {
    /// TOML file holding a padding policy.
    #[arg(long, global = true, env = "WMS_ID_POLICY_FILE")]
    pub policy: Option<PathBuf>,

    /// Field width.
    #[arg(long, global = true)]
    pub length: Option<usize>,

    /// Alignment of the content (left or right).
    #[arg(long, global = true)]
    pub align: Option<Alignment>,

    /// Fill character; implies padding.
    #[arg(long, global = true)]
    pub padder: Option<char>,

    /// Leave values unpadded.
    #[arg(long, global = true, conflicts_with = "padder")]
    pub no_pad: bool,
}

impl PolicyArgs {
    /// Resolves the effective policy.
    pub fn resolve(&self) -> Result<PaddingPolicy, CliError> {
        let base = match &self.policy {
            Some(path) => load_policy_file(path)?,
            None => PaddingPolicy::from_env()?,
        };
        self.apply(base)
    }

    /// Applies the command-line overrides to `policy`.
    pub fn apply(&self, mut policy: PaddingPolicy) -> Result<PaddingPolicy, CliError> {
        if let Some(length) = self.length {
            policy.set_length(length);
        }
        if let Some(align) = self.align {
            policy.set_alignment(align);
        }
        if let Some(padder) = self.padder {
            policy.set_pad_char(padder);
        }
        if self.no_pad {
            policy.set_padded(false);
        }
        policy.validate()?;
        debug!(%policy, "effective padding policy");
        Ok(policy)
    }
}

fn load_policy_file(path: &Path) -> Result<PaddingPolicy, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::PolicyFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(PaddingPolicy::from_toml_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_without_overrides() {
        let policy = PolicyArgs::default().apply(PaddingPolicy::DEFAULT).unwrap();
        assert_eq!(policy, PaddingPolicy::DEFAULT);
    }

    #[test]
    fn test_apply_overrides() {
        let args = PolicyArgs {
            length: Some(6),
            align: Some(Alignment::Left),
            padder: Some('_'),
            ..Default::default()
        };
        let policy = args.apply(PaddingPolicy::unpadded()).unwrap();
        assert_eq!(
            policy,
            PaddingPolicy::new(6)
                .with_pad_char('_')
                .with_alignment(Alignment::Left)
        );
    }

    #[test]
    fn test_apply_no_pad() {
        let args = PolicyArgs {
            no_pad: true,
            ..Default::default()
        };
        assert!(!args.apply(PaddingPolicy::DEFAULT).unwrap().is_padded());
    }

    #[test]
    fn test_apply_rejects_zero_length() {
        let args = PolicyArgs {
            length: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            args.apply(PaddingPolicy::DEFAULT),
            Err(CliError::Id(e)) if e.is_policy_error()
        ));
    }

    #[test]
    fn test_apply_rejects_oversized_length() {
        let args = PolicyArgs {
            length: Some(usize::MAX / 2),
            padder: Some('€'),
            ..Default::default()
        };
        assert!(matches!(
            args.apply(PaddingPolicy::DEFAULT),
            Err(CliError::Id(e)) if e.is_policy_error()
        ));
    }

    #[test]
    fn test_missing_policy_file() {
        let args = PolicyArgs {
            policy: Some(PathBuf::from("/nonexistent/wms-policy.toml")),
            ..Default::default()
        };
        assert!(matches!(args.resolve(), Err(CliError::PolicyFile { .. })));
    }

    #[test]
    fn test_policy_file_then_flags() {
        let path = std::env::temp_dir().join(format!("wms-policy-{}.toml", std::process::id()));
        fs::write(&path, "length = 8\nalignment = \"LEFT\"\n").unwrap();

        let args = PolicyArgs {
            policy: Some(path.clone()),
            padder: Some('.'),
            ..Default::default()
        };
        let policy = args.resolve().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(policy.length(), 8);
        assert_eq!(policy.alignment(), Alignment::Left);
        assert_eq!(policy.pad_char(), '.');
    }
}
