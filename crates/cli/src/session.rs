//! Interactive session.
//!
//! Line-oriented stand-in for a windowed front end: every command maps to
//! one tracker call, errors are printed as notices and the loop carries on.

use anyhow::Result;
use portfolio_tracker_core::models::portfolio::ClearOutcome;
use portfolio_tracker_core::PortfolioTracker;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  add SYMBOL QTY   add shares (merges with an existing holding)
  list             show current holdings
  catalog          show available stocks and prices
  total            show total portfolio value
  preview          show the report
  save             export the report to a text file
  clear            remove all holdings
  help             show this message
  quit             leave the session";

pub struct Session<R, W> {
    tracker: PortfolioTracker,
    export_dir: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(tracker: PortfolioTracker, export_dir: PathBuf, input: R, output: W) -> Self {
        Self {
            tracker,
            export_dir,
            input,
            output,
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Stock Portfolio Tracker (Indian Rupees). Type 'help' for commands.")?;
        while let Some(line) = self.prompt("> ")? {
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let args: Vec<&str> = words.collect();
            match command.to_lowercase().as_str() {
                "add" => self.add(&args)?,
                "list" => self.list()?,
                "catalog" => self.catalog()?,
                "total" => self.total()?,
                "preview" => self.preview()?,
                "save" => self.save()?,
                "clear" => self.clear()?,
                "help" => writeln!(self.output, "{HELP}")?,
                "quit" | "exit" => break,
                other => writeln!(self.output, "Unknown command '{other}'. Type 'help'.")?,
            }
        }
        Ok(())
    }

    /// End the session, handing back the tracker.
    pub fn into_tracker(self) -> PortfolioTracker {
        self.tracker
    }

    fn add(&mut self, args: &[&str]) -> Result<()> {
        let [symbol, quantity] = args else {
            writeln!(self.output, "Warning: usage is 'add SYMBOL QTY'")?;
            return Ok(());
        };
        let before = self.tracker.quantity_of(symbol).unwrap_or(0);
        match self.tracker.add_holding_text(symbol, quantity) {
            Ok(total) => writeln!(
                self.output,
                "Added {} shares of {} (now holding {total})",
                total - before,
                symbol.trim().to_uppercase()
            )?,
            Err(e) => writeln!(self.output, "Warning: {e}")?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        if self.tracker.is_empty() {
            writeln!(self.output, "Portfolio is empty.")?;
            return Ok(());
        }
        let snapshot = self.tracker.valuate()?;
        for line in &snapshot.lines {
            writeln!(
                self.output,
                "{:<12} {:<12} {:<15} {}",
                line.symbol,
                line.quantity,
                self.tracker.format_amount(line.unit_price),
                self.tracker.format_amount(line.line_value)
            )?;
        }
        Ok(())
    }

    fn catalog(&mut self) -> Result<()> {
        for (symbol, price) in self.tracker.catalog_rows() {
            writeln!(self.output, "{symbol:<12} {price}")?;
        }
        Ok(())
    }

    fn total(&mut self) -> Result<()> {
        match self.tracker.total_display() {
            Ok(label) => writeln!(self.output, "{label}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn preview(&mut self) -> Result<()> {
        match self.tracker.preview_report() {
            Ok(report) => write!(self.output, "{report}")?,
            Err(e) => writeln!(self.output, "Warning: {e}")?,
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let at = chrono::Local::now().naive_local();
        match self.tracker.export_report(&self.export_dir, at) {
            Ok(path) => writeln!(self.output, "Portfolio saved to: {}", path.display())?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.tracker.is_empty() {
            writeln!(self.output, "Portfolio is already empty!")?;
            return Ok(());
        }
        let answer = self
            .prompt("Are you sure you want to clear the entire portfolio? [y/N] ")?
            .unwrap_or_default();
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(self.output, "Clear cancelled.")?;
            return Ok(());
        }
        match self.tracker.clear_portfolio() {
            ClearOutcome::Cleared { removed } => {
                writeln!(self.output, "Portfolio cleared ({removed} holdings removed).")?
            }
            ClearOutcome::AlreadyEmpty => writeln!(self.output, "Portfolio is already empty!")?,
        }
        Ok(())
    }

    /// Print `prompt` and read one line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
