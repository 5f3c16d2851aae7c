//! Turning API payloads into something a person can read

pub mod html;
pub mod ordering;
pub mod quality;
pub mod report;
pub mod text;
pub mod units;
pub mod view_state;

pub use html::{render_document, render_fragment};
pub use quality::Quality;
pub use report::{
    build_report, report_from_envelope, Field, LinkEntry, LinkSection, Report, ReportOptions,
    SectionKind, VideoReport,
};
pub use text::render_text;
pub use units::{format_bytes, format_duration};
pub use view_state::ViewState;
