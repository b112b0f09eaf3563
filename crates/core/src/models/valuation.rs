use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One valued holding. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationLine {
    pub symbol: String,

    pub quantity: u64,

    /// Catalogue price per share
    pub unit_price: Decimal,

    /// quantity × unit_price, unrounded
    pub line_value: Decimal,
}

/// Read-only valuation of the whole portfolio at a point in time.
///
/// Lines follow the store's first-seen order. `total_value` is the exact
/// sum of every `line_value`; rounding only happens when formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationSnapshot {
    pub lines: Vec<ValuationLine>,
    pub total_value: Decimal,
}

impl ValuationSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct stocks valued.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_shares(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Line for `symbol` (case-insensitive), if held.
    #[must_use]
    pub fn line(&self, symbol: &str) -> Option<&ValuationLine> {
        let upper = symbol.trim().to_uppercase();
        self.lines.iter().find(|l| l.symbol == upper)
    }
}

/// Indian numbering magnitude of a rupee amount, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Magnitude {
    /// Total ≥ 1,00,00,000; the value is total / 10^7
    Crores(Decimal),
    /// 1,00,000 ≤ total < 1,00,00,000; the value is total / 10^5
    Lakhs(Decimal),
}

impl Magnitude {
    /// Scaled amount (unrounded).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Magnitude::Crores(v) | Magnitude::Lakhs(v) => *v,
        }
    }

    #[must_use]
    pub fn unit_label(&self) -> &'static str {
        match self {
            Magnitude::Crores(_) => "Crores",
            Magnitude::Lakhs(_) => "Lakhs",
        }
    }
}
