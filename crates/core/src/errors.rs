use thiserror::Error;

/// Unified error type for the entire portfolio-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
///
/// None of these are fatal: the session reports them and carries on with
/// its in-memory state untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Catalogue ───────────────────────────────────────────────────
    #[error("Unknown stock symbol: {0}")]
    UnknownSymbol(String),

    // ── Portfolio input ─────────────────────────────────────────────
    #[error("Invalid stock symbol '{0}': not in the price catalogue")]
    InvalidSymbol(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    // ── Valuation / Reporting ───────────────────────────────────────
    #[error("Portfolio is empty — add some stocks first")]
    EmptySnapshot,

    // ── Export / Serialization ──────────────────────────────────────
    #[error("Failed to write report to {path}: {message}")]
    WriteError { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid settings: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
