//! Structured presentation of a lookup result
//!
//! A [`Report`] is what every renderer (HTML, plain text, the GUI) consumes.
//! It is either a single failure message or the grouped, sorted video
//! information.

use crate::extractor::models::{ApiEnvelope, MediaVariants, VideoMetadata};
use crate::formatter::ordering::{sort_audio_variants, sort_subtitle_variants, sort_video_variants};
use crate::formatter::units::{format_bitrate, format_bytes, format_duration, format_upload_date};
use crate::utils::error::TubelensError;
use chrono::{Local, Locale, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for missing or empty values
pub const PLACEHOLDER: &str = "None";

/// Named groups of the presentation, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    GeneralInformation,
    VideoUrls,
    AudioUrls,
    SubtitleUrls,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::GeneralInformation,
        SectionKind::VideoUrls,
        SectionKind::AudioUrls,
        SectionKind::SubtitleUrls,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::GeneralInformation => "General Information",
            SectionKind::VideoUrls => "Video Direct URLs",
            SectionKind::AudioUrls => "Audio Direct URLs",
            SectionKind::SubtitleUrls => "Subtitle Direct URLs",
        }
    }

    /// Identifier used by the HTML renderer for the section element
    pub fn element_id(self) -> &'static str {
        match self {
            SectionKind::GeneralInformation => "GeneralInformation",
            SectionKind::VideoUrls => "VideoDirectURLs",
            SectionKind::AudioUrls => "AudioDirectURLs",
            SectionKind::SubtitleUrls => "SubtitleDirectURLs",
        }
    }
}

/// One labelled line of General Information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// One media variant line; `url` is `None` when the API gave no link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSection {
    pub kind: SectionKind,
    pub entries: Vec<LinkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReport {
    pub general: Vec<Field>,
    /// Only non-empty sections, in [`SectionKind::ALL`] order
    pub links: Vec<LinkSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Lookup failed; only this message is shown
    Failure(String),
    Video(VideoReport),
}

impl Report {
    pub fn failure(err: &TubelensError) -> Self {
        Report::Failure(err.to_string())
    }

    /// Sections present in this report, in display order
    pub fn sections(&self) -> Vec<SectionKind> {
        match self {
            Report::Failure(_) => Vec::new(),
            Report::Video(video) => std::iter::once(SectionKind::GeneralInformation)
                .chain(video.links.iter().map(|s| s.kind))
                .collect(),
        }
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections().contains(&kind)
    }
}

/// Rendering knobs that depend on the user's environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Locale for the upload date; `None` gives ISO dates
    pub locale: Option<Locale>,
    /// Render dates in UTC instead of the local zone
    pub utc: bool,
}

/// Turn a raw API response into a report.
///
/// A payload-level error is reported on its own and the rest of the
/// envelope is never inspected.
pub fn report_from_envelope(envelope: ApiEnvelope, options: &ReportOptions) -> Report {
    match envelope.into_payload() {
        Ok(payload) => Report::Video(build_report(&payload.info, &payload.media, options)),
        Err(err) => Report::failure(&err),
    }
}

/// Build the grouped presentation for one video
pub fn build_report(info: &VideoMetadata, media: &MediaVariants, options: &ReportOptions) -> VideoReport {
    let mut links = Vec::new();

    let video = sort_video_variants(&media.video);
    if !video.is_empty() {
        links.push(LinkSection {
            kind: SectionKind::VideoUrls,
            entries: video
                .into_iter()
                .map(|v| LinkEntry {
                    label: format!(
                        "{} - {} kbps - {} - {}",
                        text_or_none(v.quality.as_deref()),
                        bitrate_or_none(v.bitrate),
                        text_or_none(v.codec.as_deref()),
                        size_or_none(v.size)
                    ),
                    url: v.url,
                })
                .collect(),
        });
    }

    let audio = sort_audio_variants(&media.audio);
    if !audio.is_empty() {
        links.push(LinkSection {
            kind: SectionKind::AudioUrls,
            entries: audio
                .into_iter()
                .map(|a| LinkEntry {
                    label: format!(
                        "{} kbps - {} - {}",
                        bitrate_or_none(a.bitrate),
                        text_or_none(a.codec.as_deref()),
                        size_or_none(a.size)
                    ),
                    url: a.url,
                })
                .collect(),
        });
    }

    let subtitles = sort_subtitle_variants(&media.subtitles);
    if !subtitles.is_empty() {
        links.push(LinkSection {
            kind: SectionKind::SubtitleUrls,
            entries: subtitles
                .into_iter()
                .map(|s| LinkEntry {
                    label: format!(
                        "{} - {}",
                        text_or_none(s.lang.as_deref()),
                        text_or_none(s.ext.as_deref())
                    ),
                    url: s.url,
                })
                .collect(),
        });
    }

    VideoReport {
        general: general_fields(info, options),
        links,
    }
}

fn general_fields(info: &VideoMetadata, options: &ReportOptions) -> Vec<Field> {
    let upload_date = info.upload_date.and_then(|epoch| {
        if options.utc {
            format_upload_date(epoch, &Utc, options.locale)
        } else {
            format_upload_date(epoch, &Local, options.locale)
        }
    });

    let field = |label: &'static str, value: Option<String>| Field {
        label,
        value: value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    };

    vec![
        field("URL", info.canonical_url().map(str::to_string)),
        field("ID", info.id.clone()),
        field("Title", info.title.clone()),
        field("Channel", info.channel_display().map(str::to_string)),
        field("Duration", info.duration.map(format_duration)),
        field("Views count", info.views.map(|n| n.to_string())),
        field("Likes count", info.likes.map(|n| n.to_string())),
        field("Comments count", info.comments.map(|n| n.to_string())),
        field("Tags", Some(join_list(&info.tags))),
        field("Categories", Some(join_list(&info.categories))),
        field(
            "Age restricted",
            Some(if info.age_restricted() { "Yes" } else { "No" }.to_string()),
        ),
        field("Upload date", upload_date),
    ]
}

fn join_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn text_or_none(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(PLACEHOLDER)
}

fn bitrate_or_none(value: Option<f64>) -> String {
    value.map(format_bitrate).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn size_or_none(value: Option<u64>) -> String {
    value.map(format_bytes).unwrap_or_else(|| PLACEHOLDER.to_string())
}
