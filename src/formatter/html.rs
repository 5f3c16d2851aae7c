//! HTML rendering of a [`Report`]
//!
//! The fragment is a flat list of category headers, each followed by its
//! `<ul class="section">`. Headers call `toggleSection(id)` and links call
//! `openLink(url)`; the host page supplies both handlers.

use crate::formatter::report::{LinkSection, Report, SectionKind, VideoReport};
use crate::formatter::view_state::ViewState;

const DOCUMENT_STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 24px; color: #1f2937; background: #f9fafb; }
.category { cursor: pointer; font-weight: 600; padding: 8px 12px; margin-top: 8px; background: #e0e7ff; border-radius: 8px; }
.section { list-style: none; padding: 8px 16px; margin: 4px 0; }
.section li { padding: 2px 0; word-break: break-all; }
.error { color: #ef4444; font-weight: 600; }
"#;

const DOCUMENT_SCRIPT: &str = r#"
function toggleSection(id) {
    var target = document.getElementById(id);
    var wasOpen = target !== null && target.style.display !== 'none';
    document.querySelectorAll('.section').forEach(function (section) {
        section.style.display = 'none';
    });
    if (target !== null && !wasOpen) {
        target.style.display = 'block';
    }
}

function openLink(link) {
    window.open(link, '_blank', 'noopener');
}
"#;

/// Escape text for element content and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the result area: a failure paragraph, or the sectioned lists
pub fn render_fragment(report: &Report, view: &ViewState) -> String {
    match report {
        Report::Failure(message) => {
            format!("<p class=\"error\">Error: {}</p>", escape_html(message))
        }
        Report::Video(video) => render_video(video, view),
    }
}

/// A standalone page wrapping the fragment, with the handlers it needs
pub fn render_document(report: &Report, view: &ViewState) -> String {
    let title = match report {
        Report::Video(video) => video
            .general
            .iter()
            .find(|f| f.label == "Title")
            .map(|f| format!("Tubelens - {}", f.value))
            .unwrap_or_else(|| "Tubelens".to_string()),
        Report::Failure(_) => "Tubelens".to_string(),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n<script>{}</script>\n</head>\n<body>\n<div id=\"result\">{}</div>\n</body>\n</html>\n",
        escape_html(&title),
        DOCUMENT_STYLE,
        DOCUMENT_SCRIPT,
        render_fragment(report, view)
    )
}

fn render_video(video: &VideoReport, view: &ViewState) -> String {
    let mut html = String::new();

    open_section(&mut html, SectionKind::GeneralInformation, view);
    for field in &video.general {
        html.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>",
            escape_html(field.label),
            escape_html(&field.value)
        ));
    }
    html.push_str("</ul>");

    for section in &video.links {
        render_links(&mut html, section, view);
    }

    html
}

fn render_links(html: &mut String, section: &LinkSection, view: &ViewState) {
    open_section(html, section.kind, view);
    for entry in &section.entries {
        let label = escape_html(&entry.label);
        let item = match &entry.url {
            Some(url) => format!(
                "<li><a href=\"#\" data-url=\"{}\" onclick=\"openLink(this.dataset.url); return false;\">{}</a></li>",
                escape_html(url),
                label
            ),
            None => format!("<li>{}</li>", label),
        };
        html.push_str(&item);
    }
    html.push_str("</ul>");
}

fn open_section(html: &mut String, kind: SectionKind, view: &ViewState) {
    let id = kind.element_id();
    let hidden = if view.is_expanded(kind) {
        ""
    } else {
        " style=\"display:none;\""
    };
    html.push_str(&format!(
        "<div class=\"category\" onclick=\"toggleSection('{id}')\">{}</div><ul id=\"{id}\" class=\"section\"{hidden}>",
        kind.title()
    ));
}
