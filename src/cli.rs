// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line argument parsing for gears

use change_gears::train::constants::DEFAULT_LEADSCREW_TPI;
use change_gears::{Leadscrew, Target};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lathe change-gear calculator
#[derive(Parser, Debug)]
#[command(name = "gears")]
#[command(author, version, about = "Lathe change-gear calculator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Comma-separated gear list; repeat for up to three lists
    #[arg(short, long = "gears", value_name = "LIST", global = true)]
    pub gears: Vec<String>,

    /// Leadscrew type
    #[arg(short, long, value_enum, global = true)]
    pub leadscrew: Option<LeadscrewKind>,

    /// Threads per inch of an imperial leadscrew
    #[arg(long, value_name = "TPI", global = true)]
    pub leadscrew_tpi: Option<f64>,

    /// Start from saved settings with this name
    #[arg(short, long, value_name = "NAME", global = true)]
    pub profile: Option<String>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find gear trains for one pitch or thread count
    Search {
        /// Thread to cut, e.g. 1.25mm or 20tpi
        target: Target,

        /// Include four-gear trains even when two-gear trains exist
        #[arg(short, long)]
        all: bool,
    },

    /// Build a thread chart with few gear changes between rows
    Chart {
        /// Threads to cut, one chart row each
        #[arg(required = true)]
        targets: Vec<Target>,
    },

    /// Manage saved settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Save the current gear lists and leadscrew under a name
    Save {
        name: String,

        /// Remember to include four-gear trains
        #[arg(short, long)]
        all: bool,
    },

    /// Show saved settings
    Show { name: String },

    /// List saved settings
    List,

    /// Delete saved settings
    Remove { name: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table (default)
    Table,
    /// JSON document
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadscrewKind {
    /// 1.5 mm lead
    Metric,
    /// Imperial, 16 TPI unless --leadscrew-tpi says otherwise
    Imperial,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Leadscrew requested on the command line, if any.
    pub fn leadscrew_override(&self) -> Option<Leadscrew> {
        match (self.leadscrew, self.leadscrew_tpi) {
            (Some(LeadscrewKind::Metric), _) => Some(Leadscrew::Metric),
            (Some(LeadscrewKind::Imperial), tpi) => Some(Leadscrew::Imperial {
                tpi: tpi.unwrap_or(DEFAULT_LEADSCREW_TPI),
            }),
            (None, Some(tpi)) => Some(Leadscrew::Imperial { tpi }),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_search() {
        let cli = Cli::parse_from(["gears", "search", "20tpi"]);
        match cli.command {
            Command::Search { target, all } => {
                assert_eq!(target, Target::Tpi(20.0));
                assert!(!all);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.gears.is_empty());
    }

    #[test]
    fn test_cli_parsing_with_options() {
        let cli = Cli::parse_from([
            "gears", "search", "1.25mm", "--all", "-g", "20,30", "-g", "40", "-l", "metric", "-f",
            "json",
        ]);
        assert!(matches!(cli.command, Command::Search { all: true, .. }));
        assert_eq!(cli.gears, vec!["20,30", "40"]);
        assert_eq!(cli.leadscrew_override(), Some(Leadscrew::Metric));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_parsing_chart_keeps_order() {
        let cli = Cli::parse_from(["gears", "chart", "8tpi", "1mm", "20tpi"]);
        match cli.command {
            Command::Chart { targets } => assert_eq!(
                targets,
                vec![Target::Tpi(8.0), Target::Pitch(1.0), Target::Tpi(20.0)]
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_leadscrew_tpi_implies_imperial() {
        let cli = Cli::parse_from(["gears", "search", "20tpi", "--leadscrew-tpi", "8"]);
        assert_eq!(cli.leadscrew_override(), Some(Leadscrew::Imperial { tpi: 8.0 }));
        let cli = Cli::parse_from(["gears", "search", "20tpi"]);
        assert_eq!(cli.leadscrew_override(), None);
    }

    #[test]
    fn test_bad_target_is_rejected() {
        assert!(Cli::try_parse_from(["gears", "search", "20"]).is_err());
    }

    #[test]
    fn test_settings_subcommands() {
        let cli = Cli::parse_from(["gears", "settings", "save", "mini", "--all"]);
        assert!(matches!(
            cli.command,
            Command::Settings(SettingsCommand::Save { ref name, all: true }) if name == "mini"
        ));
    }
}
