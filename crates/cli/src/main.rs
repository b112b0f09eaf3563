//! Portfolio Tracker - terminal front end
//!
//! Drives the core library: list the catalogue, value holdings, preview and
//! export the INR portfolio report.

mod cli;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_tracker_core::PortfolioTracker;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{CliApp, Command, ReportCmd, SessionCmd};
use crate::config::load_settings;
use crate::session::Session;

fn main() -> Result<()> {
    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    let settings = load_settings(app.config.as_deref())?;
    let tracker = PortfolioTracker::with_settings(settings)
        .context("Invalid report settings")?;

    match app.command {
        Command::Catalog => catalog_command(&tracker),
        Command::Report(cmd) => report_command(tracker, cmd),
        Command::Session(cmd) => session_command(tracker, cmd),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn catalog_command(tracker: &PortfolioTracker) -> Result<()> {
    println!("{:<12} {:<16} Name", "Stock", "Price");
    for listing in tracker.catalog_listings() {
        let price = tracker.format_amount(listing.price);
        println!("{:<12} {:<16} {}", listing.symbol, price, listing.name);
    }
    Ok(())
}

fn report_command(mut tracker: PortfolioTracker, cmd: ReportCmd) -> Result<()> {
    for (symbol, quantity) in &cmd.holdings {
        tracker
            .add_holding_text(symbol, quantity)
            .with_context(|| format!("Cannot add {symbol}={quantity}"))?;
    }

    if cmd.json {
        println!("{}", tracker.snapshot_to_json()?);
        return Ok(());
    }

    // Preview and export share one instant so they are byte-identical.
    let at = chrono::Local::now().naive_local();
    println!("{}", tracker.total_display()?);
    println!();
    print!("{}", tracker.render_report(at)?);

    if let Some(dir) = cmd.export {
        let path = tracker
            .export_report(&dir, at)
            .context("Failed to save report")?;
        println!();
        println!("Portfolio saved to: {}", path.display());
    }
    Ok(())
}

fn session_command(tracker: PortfolioTracker, cmd: SessionCmd) -> Result<()> {
    let export_dir = cmd
        .export_dir
        .unwrap_or_else(|| PathBuf::from(&tracker.settings().export_dir));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(tracker, export_dir, stdin.lock(), stdout.lock());
    session.run()?;
    let tracker = session.into_tracker();
    tracing::info!(holdings = tracker.holdings().len(), "session ended");
    Ok(())
}
