//! GUI components

pub mod section_list;
pub mod url_input;

pub use section_list::report_view;
pub use url_input::url_input;
