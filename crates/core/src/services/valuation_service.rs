use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::catalog::PriceCatalog;
use crate::models::portfolio::PortfolioStore;
use crate::models::valuation::{Magnitude, ValuationLine, ValuationSnapshot};

/// 1 Crore = 1,00,00,000
pub const CRORE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// 1 Lakh = 1,00,000
pub const LAKH: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Values holdings against the price catalogue.
///
/// Every call recomputes from the store, so a snapshot is never stale
/// relative to the store it was taken from.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Value every holding and sum the lines.
    ///
    /// Arithmetic is exact `Decimal`; nothing is rounded here.
    pub fn valuate(
        &self,
        store: &PortfolioStore,
        catalog: &PriceCatalog,
    ) -> Result<ValuationSnapshot, CoreError> {
        let mut lines = Vec::with_capacity(store.len());
        let mut total_value = Decimal::ZERO;

        for holding in store.entries() {
            let unit_price = catalog.lookup(&holding.symbol)?;
            let line_value = Decimal::from(holding.quantity)
                .checked_mul(unit_price)
                .ok_or_else(|| {
                    CoreError::Overflow(format!(
                        "{} × {} for {}",
                        holding.quantity, unit_price, holding.symbol
                    ))
                })?;
            total_value = total_value
                .checked_add(line_value)
                .ok_or_else(|| CoreError::Overflow("portfolio total".into()))?;

            lines.push(ValuationLine {
                symbol: holding.symbol.clone(),
                quantity: holding.quantity,
                unit_price,
                line_value,
            });
        }

        debug!(lines = lines.len(), %total_value, "valuated portfolio");
        Ok(ValuationSnapshot { lines, total_value })
    }

    /// Line with the greatest value; the earliest line wins a tie.
    pub fn largest_holding<'a>(
        &self,
        snapshot: &'a ValuationSnapshot,
    ) -> Result<&'a ValuationLine, CoreError> {
        let mut lines = snapshot.lines.iter();
        let mut best = lines.next().ok_or(CoreError::EmptySnapshot)?;
        for line in lines {
            if line.line_value > best.line_value {
                best = line;
            }
        }
        Ok(best)
    }

    /// Crore/Lakh annotation for a total, or `None` below one lakh.
    /// Both thresholds are inclusive.
    #[must_use]
    pub fn classify_magnitude(total: Decimal) -> Option<Magnitude> {
        if total >= CRORE {
            Some(Magnitude::Crores(total / CRORE))
        } else if total >= LAKH {
            Some(Magnitude::Lakhs(total / LAKH))
        } else {
            None
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
