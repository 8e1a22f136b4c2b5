//! Core UI functionality for the Routine application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions produced by input and consumed by the app
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling at frame rate
//!
//! Components turn terminal events into [`Action`]s; the app applies them to
//! the board and renders the resulting snapshot.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
