use chrono::NaiveDateTime;

use crate::errors::CoreError;
use crate::models::settings::{ReportSettings, REPORT_WIDTH, TITLE_INDENT};
use crate::models::valuation::ValuationSnapshot;
use crate::services::currency_service::CurrencyService;
use crate::services::valuation_service::ValuationService;

/// Column widths of the holdings table: Stock, Quantity, Price, Value.
pub const COLUMN_WIDTHS: [usize; 4] = [12, 12, 15, 20];

/// Width of the label column on the total / in-words lines.
const TOTAL_LABEL_WIDTH: usize = 39;

/// Renders a valuation snapshot into the fixed-width plain-text report.
///
/// Output depends only on the snapshot, the timestamp and the settings,
/// so the preview and the exported file are byte-identical.
pub struct ReportService {
    settings: ReportSettings,
    currency: CurrencyService,
    valuation_service: ValuationService,
}

impl ReportService {
    pub fn new(settings: ReportSettings) -> Self {
        let currency = CurrencyService::new(settings.currency_symbol.clone());
        Self {
            settings,
            currency,
            valuation_service: ValuationService::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    #[must_use]
    pub fn currency(&self) -> &CurrencyService {
        &self.currency
    }

    /// Render the full report. Fails with `EmptySnapshot` when nothing is held.
    pub fn render(
        &self,
        snapshot: &ValuationSnapshot,
        generated_at: NaiveDateTime,
    ) -> Result<String, CoreError> {
        let largest = self.valuation_service.largest_holding(snapshot)?;

        let heavy = "=".repeat(REPORT_WIDTH);
        let light = "-".repeat(REPORT_WIDTH);
        let cur = self.currency.symbol();
        let [w_stock, w_qty, w_price, w_value] = COLUMN_WIDTHS;
        let w_label = TOTAL_LABEL_WIDTH;

        let mut out = String::new();

        // Banner
        push_line(&mut out, &heavy);
        push_line(
            &mut out,
            &format!("{}{}", " ".repeat(TITLE_INDENT), self.settings.title),
        );
        push_line(&mut out, &heavy);
        push_line(
            &mut out,
            &format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        );
        push_line(&mut out, &format!("Date: {}", generated_at.format("%d-%m-%Y")));
        push_line(&mut out, "");

        // Holdings table
        push_line(&mut out, "STOCK HOLDINGS:");
        push_line(&mut out, &light);
        let price_header = format!("Price ({cur})");
        let value_header = format!("Value ({cur})");
        push_line(
            &mut out,
            &format!(
                "{:<w_stock$} {:<w_qty$} {:<w_price$} {:<w_value$}",
                "Stock", "Quantity", price_header, value_header
            ),
        );
        push_line(&mut out, &light);
        for line in &snapshot.lines {
            push_line(
                &mut out,
                &format!(
                    "{:<w_stock$} {:<w_qty$} {:<w_price$} {:<w_value$}",
                    line.symbol,
                    line.quantity,
                    self.currency.format_amount(line.unit_price),
                    self.currency.format_amount(line.line_value),
                ),
            );
        }
        push_line(&mut out, &light);

        // Totals
        push_line(
            &mut out,
            &format!(
                "{:<w_label$} {}",
                "TOTAL PORTFOLIO VALUE:",
                self.currency.format_amount(snapshot.total_value)
            ),
        );
        if let Some(magnitude) = ValuationService::classify_magnitude(snapshot.total_value) {
            push_line(
                &mut out,
                &format!(
                    "{:<w_label$} {}",
                    "IN WORDS:",
                    self.currency.format_magnitude(&magnitude)
                ),
            );
        }
        push_line(&mut out, &heavy);
        push_line(&mut out, "");

        // Summary
        push_line(&mut out, "SUMMARY:");
        push_line(&mut out, &light);
        push_line(
            &mut out,
            &format!("• Number of different stocks: {}", snapshot.line_count()),
        );
        push_line(
            &mut out,
            &format!("• Total shares held: {}", snapshot.total_shares()),
        );
        push_line(
            &mut out,
            &format!(
                "• Largest holding: {} (Value: {})",
                largest.symbol,
                self.currency.format_amount(largest.line_value)
            ),
        );
        push_line(&mut out, "");
        push_line(&mut out, &heavy);
        push_line(&mut out, &self.settings.footer_note);
        push_line(&mut out, &heavy);

        Ok(out)
    }

    /// One-line total for a live display, e.g.
    /// "Total Portfolio Value: ₹2,850,600.00 (₹28.51 Lakhs)".
    #[must_use]
    pub fn total_label(&self, snapshot: &ValuationSnapshot) -> String {
        let mut label = format!(
            "Total Portfolio Value: {}",
            self.currency.format_amount(snapshot.total_value)
        );
        if let Some(magnitude) = ValuationService::classify_magnitude(snapshot.total_value) {
            label.push_str(&format!(" ({})", self.currency.format_magnitude(&magnitude)));
        }
        label
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(ReportSettings::default())
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
