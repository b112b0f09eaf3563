use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Width of the report's rule lines and banner.
pub const REPORT_WIDTH: usize = 70;

/// Spaces in front of the banner title.
pub const TITLE_INDENT: usize = 20;

/// User-configurable report settings.
///
/// Shared by the on-screen preview and the exported file so both render
/// the same bytes. Every field has a default, so a partial settings file
/// is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Prefix for every money figure (e.g., "₹").
    pub currency_symbol: String,

    /// Banner title at the top of the report.
    pub title: String,

    /// Closing note printed after the summary block.
    pub footer_note: String,

    /// Directory the report is exported into.
    pub export_dir: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            title: "PORTFOLIO SUMMARY (INDIAN RUPEES)".to_string(),
            footer_note: "Note: Prices are for demonstration purposes only".to_string(),
            export_dir: ".".to_string(),
        }
    }
}

impl ReportSettings {
    /// Reject settings that would break the fixed-width layout.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(CoreError::Config("currency_symbol must not be empty".into()));
        }
        let title_width = self.title.chars().count();
        let max_title = REPORT_WIDTH - TITLE_INDENT;
        if title_width == 0 || title_width > max_title {
            return Err(CoreError::Config(format!(
                "title must be 1..={max_title} characters, got {title_width}"
            )));
        }
        if self.export_dir.trim().is_empty() {
            return Err(CoreError::Config("export_dir must not be empty".into()));
        }
        Ok(())
    }
}
