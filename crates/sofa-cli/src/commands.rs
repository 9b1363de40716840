//! Subcommands for the CLI tool.

use clap::{Args, Subcommand};

/// Available commands. `check` runs when none is given.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check this host against the feed and print the result row
    Check(CheckArgs),

    /// Show the feed URL and cache file locations
    Paths,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Check(CheckArgs::default())
    }
}

/// Arguments for `check`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckArgs {
    /// Print the row as JSON
    #[arg(long)]
    pub json: bool,

    /// Use this OS version instead of asking `sw_vers`
    #[arg(long = "system-version")]
    pub system_version: Option<String>,

    /// Use this hardware model instead of asking `sysctl`
    #[arg(long = "model-identifier")]
    pub model_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_default_command_is_check() {
        assert_eq!(Commands::default(), Commands::Check(CheckArgs::default()));
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from([
            "sofa-compat",
            "check",
            "--json",
            "--system-version",
            "14.5",
            "--model-identifier",
            "VirtualMac2,1",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Check(CheckArgs {
                json: true,
                system_version: Some("14.5".to_string()),
                model_identifier: Some("VirtualMac2,1".to_string()),
            }))
        );
    }
}
