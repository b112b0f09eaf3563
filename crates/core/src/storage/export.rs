use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::valuation::ValuationSnapshot;
use crate::services::report_service::ReportService;

/// Writes rendered reports to disk.
pub struct ReportExporter;

impl ReportExporter {
    /// File name for a report generated at `at`: `portfolio_YYYYMMDD_HHMMSS.txt`.
    #[must_use]
    pub fn export_filename(at: NaiveDateTime) -> String {
        format!("portfolio_{}.txt", at.format("%Y%m%d_%H%M%S"))
    }

    /// Render `snapshot` and write it into `dir`.
    ///
    /// Flow: empty check → render → single UTF-8 write. An empty snapshot
    /// is rejected before the filesystem is touched. Returns the path written.
    pub fn export(
        report_service: &ReportService,
        dir: &Path,
        snapshot: &ValuationSnapshot,
        at: NaiveDateTime,
    ) -> Result<PathBuf, CoreError> {
        if snapshot.is_empty() {
            return Err(CoreError::EmptySnapshot);
        }
        let text = report_service.render(snapshot, at)?;
        let path = dir.join(Self::export_filename(at));
        Self::write_text(&path, &text)?;
        info!(path = %path.display(), bytes = text.len(), "Portfolio saved to {}", path.display());
        Ok(path)
    }

    /// Write `text` to `path` in one call, mapping any I/O failure to `WriteError`.
    pub fn write_text(path: &Path, text: &str) -> Result<(), CoreError> {
        std::fs::write(path, text.as_bytes()).map_err(|e| {
            warn!(path = %path.display(), error = %e, "report export failed");
            CoreError::WriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })
    }
}
