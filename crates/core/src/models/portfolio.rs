use serde::{Deserialize, Serialize};

/// Upper bound on the number of shares a single holding may reach.
///
/// With the priciest catalogue entry (₹79,217.50) and 15 symbols the
/// portfolio total stays below 1.2 × 10^18, well inside `Decimal` range.
pub const MAX_HOLDING_QUANTITY: u64 = 1_000_000_000_000;

/// A (symbol, quantity) pair: shares owned of one stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased
    pub symbol: String,

    /// Number of shares held (always >= 1)
    pub quantity: u64,
}

/// Result of clearing the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing was held; no confirmation prompt is needed.
    AlreadyEmpty,
    /// All holdings were removed.
    Cleared { removed: usize },
}

/// Mutable symbol → quantity mapping for the current session.
///
/// One entry per symbol, kept in the order each symbol was first added.
/// Only `PortfolioService` mutates it, so every stored symbol has been
/// checked against the catalogue and every quantity is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioStore {
    holdings: Vec<Holding>,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holdings in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[Holding] {
        &self.holdings
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Number of distinct symbols held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Quantity held for `symbol` (case-insensitive), if any.
    #[must_use]
    pub fn quantity_of(&self, symbol: &str) -> Option<u64> {
        let upper = symbol.trim().to_uppercase();
        self.holdings
            .iter()
            .find(|h| h.symbol == upper)
            .map(|h| h.quantity)
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_shares(&self) -> u64 {
        self.holdings.iter().map(|h| h.quantity).sum()
    }

    pub(crate) fn holding_mut(&mut self, symbol: &str) -> Option<&mut Holding> {
        self.holdings.iter_mut().find(|h| h.symbol == symbol)
    }

    pub(crate) fn push(&mut self, holding: Holding) {
        self.holdings.push(holding);
    }

    pub(crate) fn drain_all(&mut self) -> usize {
        let removed = self.holdings.len();
        self.holdings.clear();
        removed
    }
}
