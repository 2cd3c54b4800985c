//! Logging setup shared by the binaries.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

/// Tracing subscriber configuration.
pub mod tracing;

pub use crate::tracing::LogFormat;
