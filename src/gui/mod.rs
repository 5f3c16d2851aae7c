//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod theme;

// Re-export for convenience
pub use app::{Message, TubelensApp};
