//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// The output format comes from `CATALOG_LOG_FORMAT` (`json`, `pretty` or
/// `compact`; default `json`). This is safe to call multiple times; subsequent
/// calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::LogFormat;
