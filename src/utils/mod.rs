//! Utility modules for the Routine application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Week arithmetic and date formatting functions
//! - [`color`] - Palette to terminal color conversion

pub mod color;
pub mod datetime;
