//! Plain-text rendering for the terminal.
//!
//! Collapsing has no meaning here, so every section is printed.

use crate::formatter::report::{Report, SectionKind};

pub fn render_text(report: &Report) -> String {
    let video = match report {
        Report::Failure(message) => return format!("Error: {}\n", message),
        Report::Video(video) => video,
    };

    let mut out = String::new();
    push_heading(&mut out, SectionKind::GeneralInformation.title());
    let width = video.general.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for field in &video.general {
        out.push_str(&format!("  {:<width$}  {}\n", format!("{}:", field.label), field.value, width = width + 1));
    }

    for section in &video.links {
        out.push('\n');
        push_heading(&mut out, section.kind.title());
        for entry in &section.entries {
            out.push_str(&format!("  - {}\n", entry.label));
            if let Some(url) = &entry.url {
                out.push_str(&format!("    {}\n", url));
            }
        }
    }

    out
}

fn push_heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::report::{Field, LinkEntry, LinkSection, VideoReport};

    #[test]
    fn failure_is_one_line() {
        assert_eq!(
            render_text(&Report::Failure("Invalid video URL".into())),
            "Error: Invalid video URL\n"
        );
    }

    #[test]
    fn prints_all_sections_with_urls() {
        let report = Report::Video(VideoReport {
            general: vec![
                Field {
                    label: "ID",
                    value: "dQw4w9WgXcQ".into(),
                },
                Field {
                    label: "Views count",
                    value: "10".into(),
                },
            ],
            links: vec![LinkSection {
                kind: SectionKind::AudioUrls,
                entries: vec![LinkEntry {
                    label: "128 kbps - opus - 1 MB".into(),
                    url: Some("https://a/1".into()),
                }],
            }],
        });

        let text = render_text(&report);
        assert!(text.starts_with("General Information\n===================\n"));
        assert!(text.contains("  ID:           dQw4w9WgXcQ\n"));
        assert!(text.contains("  Views count:  10\n"));
        assert!(text.contains("Audio Direct URLs\n"));
        assert!(text.contains("  - 128 kbps - opus - 1 MB\n    https://a/1\n"));
    }
}
