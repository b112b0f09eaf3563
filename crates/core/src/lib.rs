pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use models::{
    catalog::{PriceCatalog, StockListing},
    portfolio::{ClearOutcome, Holding, PortfolioStore},
    settings::ReportSettings,
    valuation::{ValuationLine, ValuationSnapshot},
};
use services::{
    portfolio_service::PortfolioService, report_service::ReportService,
    valuation_service::ValuationService,
};
use storage::export::ReportExporter;

use errors::CoreError;

/// Main entry point for the portfolio tracker core library.
/// Owns the price catalogue, the session's holdings and the report settings.
///
/// The presentation layer calls into this and renders what comes back;
/// nothing here is global, so several trackers can coexist (e.g. in tests).
#[must_use]
pub struct PortfolioTracker {
    catalog: PriceCatalog,
    store: PortfolioStore,
    portfolio_service: PortfolioService,
    valuation_service: ValuationService,
    report_service: ReportService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("catalog_size", &self.catalog.len())
            .field("holdings", &self.store.len())
            .field("settings", self.report_service.settings())
            .finish()
    }
}

impl PortfolioTracker {
    /// Empty portfolio over the built-in INR catalogue with default settings.
    pub fn new() -> Self {
        Self::build(PriceCatalog::indian_market(), ReportSettings::default())
    }

    /// Empty portfolio with custom report settings (validated).
    pub fn with_settings(settings: ReportSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(PriceCatalog::indian_market(), settings))
    }

    /// Empty portfolio over an arbitrary catalogue.
    pub fn with_catalog(
        catalog: PriceCatalog,
        settings: ReportSettings,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(catalog, settings))
    }

    // ── Catalogue ───────────────────────────────────────────────────

    /// Symbols in catalogue order, for a selection list.
    #[must_use]
    pub fn list_symbols(&self) -> Vec<&str> {
        self.catalog.list_symbols()
    }

    /// Catalogue rows with names and prices.
    #[must_use]
    pub fn catalog_listings(&self) -> &[StockListing] {
        self.catalog.listings()
    }

    /// Catalogue rows with the price already formatted, e.g. ("AAPL", "₹15,000.50").
    #[must_use]
    pub fn catalog_rows(&self) -> Vec<(&str, String)> {
        let currency = self.report_service.currency();
        self.catalog
            .listings()
            .iter()
            .map(|l| (l.symbol.as_str(), currency.format_amount(l.price)))
            .collect()
    }

    #[must_use]
    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Add shares of a stock. Merges with an existing holding.
    /// Returns the new quantity held for that symbol.
    pub fn add_holding(&mut self, symbol: &str, quantity: u64) -> Result<u64, CoreError> {
        self.portfolio_service
            .add_holding(&mut self.store, &self.catalog, symbol, quantity)
    }

    /// Add shares from raw user input. The symbol is checked first, then
    /// the quantity text must be a positive whole number.
    pub fn add_holding_text(&mut self, symbol: &str, quantity_text: &str) -> Result<u64, CoreError> {
        if !self.catalog.contains(symbol) {
            return Err(CoreError::InvalidSymbol(symbol.trim().to_uppercase()));
        }
        let quantity = PortfolioService::parse_quantity(quantity_text)?;
        self.add_holding(symbol, quantity)
    }

    /// Remove every holding. `AlreadyEmpty` tells the caller no
    /// confirmation was needed.
    pub fn clear_portfolio(&mut self) -> ClearOutcome {
        self.portfolio_service.clear(&mut self.store)
    }

    /// Holdings in first-added order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        self.store.entries()
    }

    #[must_use]
    pub fn quantity_of(&self, symbol: &str) -> Option<u64> {
        self.store.quantity_of(symbol)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Fresh valuation of the current holdings.
    pub fn valuate(&self) -> Result<ValuationSnapshot, CoreError> {
        self.valuation_service.valuate(&self.store, &self.catalog)
    }

    /// "Total Portfolio Value: ₹… (₹… Lakhs)" for the live total display.
    pub fn total_display(&self) -> Result<String, CoreError> {
        let snapshot = self.valuate()?;
        Ok(self.report_service.total_label(&snapshot))
    }

    /// Holding with the greatest value.
    pub fn largest_holding(&self) -> Result<ValuationLine, CoreError> {
        let snapshot = self.valuate()?;
        self.valuation_service
            .largest_holding(&snapshot)
            .cloned()
    }

    // ── Reports ─────────────────────────────────────────────────────

    /// Render the report as of `at`.
    pub fn render_report(&self, at: NaiveDateTime) -> Result<String, CoreError> {
        let snapshot = self.valuate()?;
        self.report_service.render(&snapshot, at)
    }

    /// Render the report as of the current local time.
    pub fn preview_report(&self) -> Result<String, CoreError> {
        self.render_report(now())
    }

    /// Write the report as of `at` into `dir`. Returns the written path.
    pub fn export_report(&self, dir: &Path, at: NaiveDateTime) -> Result<PathBuf, CoreError> {
        let snapshot = self.valuate()?;
        ReportExporter::export(&self.report_service, dir, &snapshot, at)
    }

    /// Write the report as of now into the configured export directory.
    pub fn export_report_now(&self) -> Result<PathBuf, CoreError> {
        let dir = PathBuf::from(&self.report_service.settings().export_dir);
        self.export_report(&dir, now())
    }

    /// Current valuation as pretty JSON (amounts as decimal strings).
    pub fn snapshot_to_json(&self) -> Result<String, CoreError> {
        let snapshot = self.valuate()?;
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Format a rupee amount with the configured currency symbol.
    #[must_use]
    pub fn format_amount(&self, amount: rust_decimal::Decimal) -> String {
        self.report_service.currency().format_amount(amount)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &ReportSettings {
        self.report_service.settings()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(catalog: PriceCatalog, settings: ReportSettings) -> Self {
        Self {
            catalog,
            store: PortfolioStore::new(),
            portfolio_service: PortfolioService::new(),
            valuation_service: ValuationService::new(),
            report_service: ReportService::new(settings),
        }
    }
}

impl Default for PortfolioTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
