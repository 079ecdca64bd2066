//! Error types for component construction and value conversion.

/// Errors raised when a component is given an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("Invalid task status: {0} (expected 0-3)")]
    InvalidStatus(u8),

    #[error("Invalid column width: {0}% (expected 1-99)")]
    InvalidColumnWidth(u8),

    #[error("Invalid days_back: {0} (expected 1-{max})", max = crate::constants::DAYS_BACK_MAX)]
    InvalidDaysBack(u32),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}
