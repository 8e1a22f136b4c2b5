//! UI module for Routine
//!
//! This module handles the terminal front-end: components, layout, animation
//! timelines and the event loop that drives the board.

pub mod animation;
pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
