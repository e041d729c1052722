// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line arguments for the `groups` binary.

use group_census::error::Result;
use group_census::SearchConfig;

/// Environment variable holding an env_logger filter.
const LOG_ENV: &str = "GROUPS_LOG";

/// Cli Arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser = clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `GROUPS_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env(LOG_ENV);
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

/// Cli arguments related to the search itself
#[derive(clap::Args, Debug)]
pub(crate) struct SearchArgs {
    /// Reject partial tables that already break cancellation or associativity
    #[arg(long = "eager")]
    eager_pruning: bool,
    /// Do not restrict prime and prime-square orders to symmetric tables
    #[arg(long = "no-abelian-pruning")]
    no_abelian_pruning: bool,
    /// Only print the final count, not the tables
    #[arg(long = "count-only")]
    count_only: bool,
}

/// Enumerate the groups of order ORDER, one table per isomorphism class
#[derive(clap::Parser, Debug)]
#[command(name = "groups", author, version, about, long_about = None)]
pub(crate) struct CliApp {
    /// Group order (number of elements)
    #[arg(value_name = "ORDER")]
    pub(crate) order: usize,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
    /// Arguments related to the search
    #[command(flatten)]
    pub(crate) search: SearchArgs,
}

impl CliApp {
    /// The search configuration requested on the command line.
    pub(crate) fn config(&self) -> Result<SearchConfig> {
        Ok(SearchConfig::new(self.order)?
            .with_eager_pruning(self.search.eager_pruning)
            .with_abelian_pruning(!self.search.no_abelian_pruning)
            .with_report_tables(!self.search.count_only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_command_is_well_formed() {
        CliApp::command().debug_assert();
    }

    #[test]
    fn test_flags_reach_config() {
        let cli = CliApp::parse_from(["groups", "4", "--eager", "--no-abelian-pruning", "--count-only"]);
        let config = cli.config().unwrap();
        assert_eq!(config.order(), 4);
        assert!(config.eager_pruning());
        assert!(!config.abelian_pruning());
        assert!(!config.report_tables());
    }

    #[test]
    fn test_defaults() {
        let config = CliApp::parse_from(["groups", "5"]).config().unwrap();
        assert!(config.abelian_pruning());
        assert!(!config.eager_pruning());
        assert!(config.report_tables());
    }

    #[test]
    fn test_zero_order_is_rejected_by_config() {
        let cli = CliApp::parse_from(["groups", "0"]);
        assert!(cli.config().is_err());
    }

    #[test]
    fn test_non_numeric_order_is_a_usage_error() {
        assert!(CliApp::try_parse_from(["groups", "four"]).is_err());
        assert!(CliApp::try_parse_from(["groups"]).is_err());
    }
}
