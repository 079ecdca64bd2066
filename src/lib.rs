//! Tasktrail - a terminal daily task tracker built from reusable grid components
//!
//! The library provides controlled TUI components (buttons, inputs, status
//! bubbles, a sortable data grid and a date-keyed grid) and an application
//! shell that composes them into a daily task tracker.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed errors raised by components
pub mod error;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use error::UiError;
