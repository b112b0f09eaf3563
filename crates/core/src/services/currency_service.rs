use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::valuation::Magnitude;

/// Renders rupee amounts for display.
///
/// The single place where `Decimal` values become text: round to two
/// fraction digits (half away from zero), group the integer part in
/// threes with commas, and prefix the currency symbol.
///
/// E.g., format_amount(2850600) → "₹2,850,600.00"
pub struct CurrencyService {
    symbol: String,
}

impl CurrencyService {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// "₹" + grouped amount with two decimals.
    #[must_use]
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{}", self.symbol, group_thousands(amount))
    }

    /// "₹28.51 Lakhs" / "₹1.25 Crores". No grouping, matching the
    /// short "in words" form.
    #[must_use]
    pub fn format_magnitude(&self, magnitude: &Magnitude) -> String {
        format!(
            "{}{:.2} {}",
            self.symbol,
            round_display(magnitude.amount()),
            magnitude.unit_label()
        )
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new("₹")
    }
}

/// Round to the two fraction digits shown to users.
#[must_use]
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two-decimal string with comma-separated thousands, e.g. "1,234,567.89".
#[must_use]
pub fn group_thousands(amount: Decimal) -> String {
    let fixed = format!("{:.2}", round_display(amount));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_threes() {
        assert_eq!(group_thousands(Decimal::new(123456789, 2)), "1,234,567.89");
        assert_eq!(group_thousands(Decimal::new(99999, 2)), "999.99");
        assert_eq!(group_thousands(Decimal::new(100000, 2)), "1,000.00");
    }

    #[test]
    fn pads_missing_fraction_digits() {
        assert_eq!(group_thousands(Decimal::from(5)), "5.00");
        assert_eq!(group_thousands(Decimal::ZERO), "0.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(group_thousands(Decimal::new(1005, 3)), "1.01");
        assert_eq!(group_thousands(Decimal::new(-1005, 3)), "-1.01");
    }
}
