//! Routine - a weekly task board for the terminal
//!
//! Tasks belong to one day of a week. The board shows the week as a strip of
//! seven days and the tasks of the selected day below it, incomplete first.
//! Completing a task slides it past its neighbours to its new slot, and
//! dragging the strip (or pressing `[` / `]`) moves between weeks.
//!
//! # Modules
//!
//! * [`board`] - Task collection, week calendar and the animation state machines
//! * [`clock`] - Injectable source of "today"
//! * [`config`] - Application configuration management
//! * [`profile`] - Profile image caching on top of an identity provider
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and colour helpers

/// Task board domain: collection, calendar, toggle and week animations
pub mod board;

/// Source of the current date
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// User profile and profile image cache
pub mod profile;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and colours
pub mod utils;
