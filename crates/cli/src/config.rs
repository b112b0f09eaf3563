//! Settings loader.
//!
//! Reads `ReportSettings` from a TOML file; absent keys keep their defaults.

use anyhow::{Context, Result};
use portfolio_tracker_core::models::settings::ReportSettings;
use std::path::Path;

/// Load and validate settings from `path`, or defaults when `path` is `None`.
pub fn load_settings(path: Option<&Path>) -> Result<ReportSettings> {
    let Some(path) = path else {
        return Ok(ReportSettings::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: ReportSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    settings.validate()?;
    tracing::debug!(path = %path.display(), "loaded report settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn none_gives_defaults() {
        assert_eq!(load_settings(None).unwrap(), ReportSettings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "export_dir = \"/tmp/reports\"").unwrap();
        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.export_dir, "/tmp/reports");
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = \"\"").unwrap();
        assert!(load_settings(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_settings(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }
}
