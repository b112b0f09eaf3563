// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn unknown_symbol() {
        let err = CoreError::UnknownSymbol("XYZ".into());
        assert_eq!(err.to_string(), "Unknown stock symbol: XYZ");
    }

    #[test]
    fn invalid_symbol() {
        let err = CoreError::InvalidSymbol("FOO".into());
        assert_eq!(
            err.to_string(),
            "Invalid stock symbol 'FOO': not in the price catalogue"
        );
    }

    #[test]
    fn invalid_quantity() {
        let err = CoreError::InvalidQuantity("'abc' is not a whole number".into());
        assert_eq!(err.to_string(), "Invalid quantity: 'abc' is not a whole number");
    }

    #[test]
    fn empty_snapshot() {
        let err = CoreError::EmptySnapshot;
        assert_eq!(err.to_string(), "Portfolio is empty — add some stocks first");
    }

    #[test]
    fn write_error() {
        let err = CoreError::WriteError {
            path: "/ro/portfolio.txt".into(),
            message: "permission denied".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write report to /ro/portfolio.txt: permission denied"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("key must be a string".into());
        assert_eq!(err.to_string(), "Serialization error: key must be a string");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("currency_symbol must not be empty".into());
        assert_eq!(err.to_string(), "Invalid settings: currency_symbol must not be empty");
    }

    #[test]
    fn overflow() {
        let err = CoreError::Overflow("portfolio total".into());
        assert_eq!(err.to_string(), "Arithmetic overflow: portfolio total");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn question_mark_converts_json_error() {
        fn parse() -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str("[1, 2")?)
        }
        assert!(matches!(parse(), Err(CoreError::Serialization(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn is_std_error_send_sync() {
        fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
        assert_bounds::<CoreError>();
    }

    #[test]
    fn debug_includes_variant_name() {
        let err = CoreError::InvalidQuantity("x".into());
        assert!(format!("{err:?}").contains("InvalidQuantity"));
    }
}
