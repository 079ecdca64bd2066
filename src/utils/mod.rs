//! Utility modules for the Tasktrail application.
//!
//! - [`datetime`] - Date window generation and header formatting

pub mod datetime;
