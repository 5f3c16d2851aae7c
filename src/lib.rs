//! Tubelens library

pub mod app;
pub mod extractor;
pub mod formatter;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use app::Inspector;
pub use extractor::{extract_video_id, ApiClient, ApiEnvelope, MetadataSource, VideoReference};
pub use formatter::{render_document, render_fragment, render_text, Report, SectionKind, ViewState};
pub use gui::{Message, TubelensApp};
pub use utils::{AppSettings, TubelensError};
