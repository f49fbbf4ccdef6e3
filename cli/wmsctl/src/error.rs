//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use wms_id::IdError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read policy file {path}: {source}")]
    PolicyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Id(#[from] IdError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::Id(id_err)) = err.downcast_ref::<CliError>() {
        if id_err.is_policy_error() {
            eprintln!(
                "\n{}",
                "Hint: check WMS_ID_* variables, --policy and the padding flags.".yellow()
            );
        }
    }

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}
