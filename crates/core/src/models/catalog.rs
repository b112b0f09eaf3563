use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Built-in price table: (symbol, price in paise, display name).
/// Prices are for demonstration purposes only.
const DEFAULT_LISTINGS: [(&str, i64, &str); 15] = [
    ("AAPL", 1_500_050, "Apple Inc."),
    ("TSLA", 2_087_525, "Tesla Inc."),
    ("MSFT", 2_835_080, "Microsoft"),
    ("GOOGL", 1_215_040, "Alphabet (Google)"),
    ("AMZN", 1_460_875, "Amazon"),
    ("NVDA", 7_921_750, "NVIDIA"),
    ("META", 4_043_750, "Meta Platforms"),
    ("RELIANCE", 285_060, "Reliance Industries"),
    ("TCS", 385_075, "Tata Consultancy Services"),
    ("INFY", 165_025, "Infosys"),
    ("HDFCBANK", 175_040, "HDFC Bank"),
    ("WIPRO", 52_530, "Wipro"),
    ("HINDUNILVR", 245_080, "Hindustan Unilever"),
    ("ITC", 43_560, "ITC Limited"),
    ("SBIN", 65_075, "State Bank of India"),
];

/// One row of the price catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockListing {
    /// Ticker symbol, uppercased (e.g., "AAPL", "RELIANCE")
    pub symbol: String,

    /// Human-readable name (e.g., "Apple Inc.")
    pub name: String,

    /// Unit price in rupees, two fraction digits
    pub price: Decimal,
}

impl StockListing {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            price,
        }
    }
}

/// Immutable symbol → unit price table, fixed for the lifetime of the process.
///
/// Listings keep their construction order; that order is what the
/// selection list shows. Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCatalog {
    listings: Vec<StockListing>,
}

impl PriceCatalog {
    /// The fixed 15-stock INR catalogue.
    pub fn indian_market() -> Self {
        let listings = DEFAULT_LISTINGS
            .iter()
            .map(|(symbol, paise, name)| StockListing::new(*symbol, *name, Decimal::new(*paise, 2)))
            .collect();
        Self { listings }
    }

    /// Build a catalogue from arbitrary listings.
    ///
    /// Prices must be positive and symbols unique (case-insensitive);
    /// the first violation is reported as `Config`.
    pub fn from_listings(listings: Vec<StockListing>) -> Result<Self, CoreError> {
        let mut seen = std::collections::HashSet::new();
        for listing in &listings {
            if listing.symbol.trim().is_empty() {
                return Err(CoreError::Config("catalogue symbol must not be empty".into()));
            }
            if listing.price <= Decimal::ZERO {
                return Err(CoreError::Config(format!(
                    "price for {} must be positive, got {}",
                    listing.symbol, listing.price
                )));
            }
            if !seen.insert(listing.symbol.as_str()) {
                return Err(CoreError::Config(format!(
                    "duplicate catalogue symbol {}",
                    listing.symbol
                )));
            }
        }
        Ok(Self { listings })
    }

    /// Unit price for `symbol`.
    pub fn lookup(&self, symbol: &str) -> Result<Decimal, CoreError> {
        self.listing(symbol)
            .map(|l| l.price)
            .ok_or_else(|| CoreError::UnknownSymbol(symbol.trim().to_uppercase()))
    }

    /// Full listing for `symbol`, if present.
    #[must_use]
    pub fn listing(&self, symbol: &str) -> Option<&StockListing> {
        let upper = symbol.trim().to_uppercase();
        self.listings.iter().find(|l| l.symbol == upper)
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.listing(symbol).is_some()
    }

    /// Symbols in catalogue order.
    #[must_use]
    pub fn list_symbols(&self) -> Vec<&str> {
        self.listings.iter().map(|l| l.symbol.as_str()).collect()
    }

    #[must_use]
    pub fn listings(&self) -> &[StockListing] {
        &self.listings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::indian_market()
    }
}
