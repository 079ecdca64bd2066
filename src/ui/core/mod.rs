//! Core UI functionality for the Tasktrail application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the actions components emit, the component trait they implement, and the
//! terminal event source.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions emitted by components and reduced by the app
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//!
//! # Architecture
//!
//! Components never own the data they display. A key press is turned into an
//! [`Action`] describing the requested change; the application shell applies it
//! to its state and hands the new state back to the components before the next
//! frame is drawn.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, View};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
