//! Utility modules for error handling, configuration and host integration

pub mod config;
pub mod error;
pub mod links;
pub mod platform;

// Re-export for convenience
pub use config::AppSettings;
pub use error::TubelensError;
pub use links::open_external;
