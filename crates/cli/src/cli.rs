//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stock portfolio tracker with fixed INR prices
#[derive(Parser, Debug)]
#[command(
    name = "portfolio-tracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record stock holdings, value them in Indian Rupees and export a text report"
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Report settings file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the stock catalogue with prices
    Catalog,

    /// Value a set of holdings given on the command line
    Report(ReportCmd),

    /// Interactive session reading commands from stdin
    Session(SessionCmd),
}

#[derive(Parser, Debug)]
pub struct ReportCmd {
    /// Holding as SYMBOL=QUANTITY; repeat to add more (same symbol merges)
    #[arg(long = "hold", value_name = "SYMBOL=QTY", value_parser = parse_hold, required = true)]
    pub holdings: Vec<(String, String)>,

    /// Export the report into this directory
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Print the valuation as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct SessionCmd {
    /// Directory for `save` (overrides the settings file)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

/// Split "SYMBOL=QTY". The quantity text is validated later by the core,
/// so "AAPL=3.5" parses here and is rejected with a proper error.
fn parse_hold(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((symbol, qty)) if !symbol.trim().is_empty() => {
            Ok((symbol.trim().to_string(), qty.to_string()))
        }
        _ => Err(format!("expected SYMBOL=QUANTITY, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_splits_on_first_equals() {
        assert_eq!(parse_hold("AAPL=2").unwrap(), ("AAPL".into(), "2".into()));
        assert_eq!(parse_hold(" tcs =3.5").unwrap(), ("tcs".into(), "3.5".into()));
    }

    #[test]
    fn hold_without_symbol_is_rejected() {
        assert!(parse_hold("=5").is_err());
        assert!(parse_hold("AAPL").is_err());
    }

    #[test]
    fn report_requires_hold() {
        let parsed = CliApp::try_parse_from(["portfolio-tracker", "report"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_collects_repeated_holds() {
        let app = CliApp::try_parse_from([
            "portfolio-tracker",
            "report",
            "--hold",
            "AAPL=2",
            "--hold",
            "AAPL=3",
            "--json",
        ])
        .unwrap();
        match app.command {
            Command::Report(cmd) => {
                assert_eq!(cmd.holdings.len(), 2);
                assert!(cmd.json);
                assert!(cmd.export.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
