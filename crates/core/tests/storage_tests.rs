// ═══════════════════════════════════════════════════════════════════
// Storage Tests — export filename, ReportExporter writes
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::models::catalog::PriceCatalog;
use portfolio_tracker_core::models::portfolio::PortfolioStore;
use portfolio_tracker_core::models::valuation::ValuationSnapshot;
use portfolio_tracker_core::services::portfolio_service::PortfolioService;
use portfolio_tracker_core::services::report_service::ReportService;
use portfolio_tracker_core::services::valuation_service::ValuationService;
use portfolio_tracker_core::storage::export::ReportExporter;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn sample_snapshot() -> ValuationSnapshot {
    let catalog = PriceCatalog::indian_market();
    let mut store = PortfolioStore::new();
    let service = PortfolioService::new();
    service.add_holding(&mut store, &catalog, "TCS", 10).unwrap();
    service.add_holding(&mut store, &catalog, "HINDUNILVR", 3).unwrap();
    ValuationService::new().valuate(&store, &catalog).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// File naming
// ═══════════════════════════════════════════════════════════════════

mod filename {
    use super::*;

    #[test]
    fn embeds_date_and_time() {
        assert_eq!(
            ReportExporter::export_filename(at(2026, 10, 19, 14, 3, 5)),
            "portfolio_20261019_140305.txt"
        );
    }

    #[test]
    fn zero_pads_fields() {
        assert_eq!(
            ReportExporter::export_filename(at(2027, 1, 2, 0, 0, 9)),
            "portfolio_20270102_000009.txt"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Export
// ═══════════════════════════════════════════════════════════════════

mod export {
    use super::*;

    #[test]
    fn writes_exactly_the_rendered_text() {
        let dir = tempfile::tempdir().unwrap();
        let report = ReportService::default();
        let snap = sample_snapshot();
        let when = at(2026, 10, 19, 14, 3, 5);

        let path = ReportExporter::export(&report, dir.path(), &snap, when).unwrap();

        assert_eq!(path, dir.path().join("portfolio_20261019_140305.txt"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.render(&snap, when).unwrap());
    }

    #[test]
    fn written_file_is_utf8_with_rupee_sign() {
        let dir = tempfile::tempdir().unwrap();
        let path = ReportExporter::export(
            &ReportService::default(),
            dir.path(),
            &sample_snapshot(),
            at(2026, 10, 19, 9, 30, 0),
        )
        .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("₹38,507.50"));
    }

    #[test]
    fn empty_snapshot_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = ReportExporter::export(
            &ReportService::default(),
            dir.path(),
            &ValuationSnapshot::default(),
            at(2026, 10, 19, 9, 30, 0),
        );
        assert!(matches!(result, Err(CoreError::EmptySnapshot)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no").join("such").join("dir");
        let result = ReportExporter::export(
            &ReportService::default(),
            &missing,
            &sample_snapshot(),
            at(2026, 10, 19, 9, 30, 0),
        );
        match result {
            Err(CoreError::WriteError { path, message }) => {
                assert!(path.ends_with("portfolio_20261019_093000.txt"));
                assert!(!message.is_empty());
            }
            other => panic!("expected WriteError, got {other:?}"),
        }
    }

    #[test]
    fn write_text_to_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ReportExporter::write_text(dir.path(), "hello");
        assert!(matches!(result, Err(CoreError::WriteError { .. })));
    }

    #[test]
    fn write_text_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        ReportExporter::write_text(&path, "first").unwrap();
        ReportExporter::write_text(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(Path::new(&path)).unwrap(), "second");
    }
}
