use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::catalog::PriceCatalog;
use crate::models::portfolio::{ClearOutcome, Holding, PortfolioStore, MAX_HOLDING_QUANTITY};

/// Manages holdings: validated adds with merge semantics, and clearing.
///
/// Pure business logic — no I/O. Easy to test.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add `quantity` shares of `symbol` to the store.
    ///
    /// Merges into an existing holding or appends a new one, keeping
    /// first-seen order. Returns the resulting quantity for the symbol.
    /// A rejected add leaves the store untouched.
    pub fn add_holding(
        &self,
        store: &mut PortfolioStore,
        catalog: &PriceCatalog,
        symbol: &str,
        quantity: u64,
    ) -> Result<u64, CoreError> {
        let symbol = symbol.trim().to_uppercase();
        if !catalog.contains(&symbol) {
            warn!(%symbol, "rejected add: symbol not in catalogue");
            return Err(CoreError::InvalidSymbol(symbol));
        }
        if quantity == 0 {
            warn!(%symbol, quantity, "rejected add: quantity must be at least 1");
            return Err(CoreError::InvalidQuantity(
                "quantity must be greater than 0".into(),
            ));
        }

        let current = store.quantity_of(&symbol).unwrap_or(0);
        let new_quantity = current
            .checked_add(quantity)
            .filter(|q| *q <= MAX_HOLDING_QUANTITY)
            .ok_or_else(|| {
                warn!(%symbol, current, quantity, "rejected add: holding would exceed ceiling");
                CoreError::InvalidQuantity(format!(
                    "holding of {symbol} would exceed {MAX_HOLDING_QUANTITY} shares"
                ))
            })?;

        match store.holding_mut(&symbol) {
            Some(holding) => holding.quantity = new_quantity,
            None => store.push(Holding {
                symbol: symbol.clone(),
                quantity: new_quantity,
            }),
        }

        info!(%symbol, added = quantity, total = new_quantity, "Added {quantity} shares of {symbol}");
        Ok(new_quantity)
    }

    /// Remove every holding.
    pub fn clear(&self, store: &mut PortfolioStore) -> ClearOutcome {
        if store.is_empty() {
            debug!("clear requested on an empty portfolio");
            return ClearOutcome::AlreadyEmpty;
        }
        let removed = store.drain_all();
        info!(removed, "Portfolio cleared");
        ClearOutcome::Cleared { removed }
    }

    /// Parse raw quantity text from user input.
    ///
    /// Accepts a run of ASCII digits (surrounding whitespace ignored) whose
    /// value is at least 1. Signs, decimals and anything else are rejected.
    pub fn parse_quantity(text: &str) -> Result<u64, CoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidQuantity(format!(
                "'{text}' is not a whole number"
            )));
        }
        let quantity: u64 = trimmed.parse().map_err(|_| {
            CoreError::InvalidQuantity(format!("'{trimmed}' is too large"))
        })?;
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity(
                "quantity must be greater than 0".into(),
            ));
        }
        Ok(quantity)
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
