//! Display order for media variants
//!
//! Inputs are borrowed and never reordered; each function returns a new,
//! sorted vector. All sorts are stable.

use crate::extractor::models::{AudioVariant, SubtitleVariant, VideoVariant};
use crate::formatter::quality::compare_quality_desc;
use std::cmp::Ordering;

/// Missing bitrates rank below every real one
fn bitrate_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::NEG_INFINITY);
    let b = b.unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}

/// Quality descending, then bitrate descending
pub fn sort_video_variants(variants: &[VideoVariant]) -> Vec<VideoVariant> {
    let mut sorted = variants.to_vec();
    sorted.sort_by(|a, b| {
        compare_quality_desc(a.quality.as_deref(), b.quality.as_deref())
            .then_with(|| bitrate_desc(a.bitrate, b.bitrate))
    });
    sorted
}

/// Bitrate descending
pub fn sort_audio_variants(variants: &[AudioVariant]) -> Vec<AudioVariant> {
    let mut sorted = variants.to_vec();
    sorted.sort_by(|a, b| bitrate_desc(a.bitrate, b.bitrate));
    sorted
}

/// Language code ascending, case-insensitive first; missing codes last
pub fn sort_subtitle_variants(variants: &[SubtitleVariant]) -> Vec<SubtitleVariant> {
    let mut sorted = variants.to_vec();
    sorted.sort_by(|a, b| match (a.lang.as_deref(), b.lang.as_deref()) {
        (Some(x), Some(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(quality: &str, bitrate: f64) -> VideoVariant {
        VideoVariant {
            quality: Some(quality.to_string()),
            bitrate: Some(bitrate),
            ..Default::default()
        }
    }

    fn qualities(variants: &[VideoVariant]) -> Vec<&str> {
        variants.iter().map(|v| v.quality.as_deref().unwrap_or("-")).collect()
    }

    #[test]
    fn video_by_quality_descending() {
        let input = vec![video("480p", 1.0), video("1080p", 1.0), video("720p", 1.0)];
        let sorted = sort_video_variants(&input);
        assert_eq!(qualities(&sorted), ["1080p", "720p", "480p"]);
        // input untouched
        assert_eq!(qualities(&input), ["480p", "1080p", "720p"]);
    }

    #[test]
    fn video_ties_broken_by_bitrate() {
        let input = vec![
            video("720p", 1200.0),
            video("1080p", 2500.0),
            video("720p", 2200.0),
            video("1080p", 4500.0),
        ];
        let sorted = sort_video_variants(&input);
        let pairs: Vec<(&str, f64)> = sorted
            .iter()
            .map(|v| (v.quality.as_deref().unwrap(), v.bitrate.unwrap()))
            .collect();
        assert_eq!(
            pairs,
            [("1080p", 4500.0), ("1080p", 2500.0), ("720p", 2200.0), ("720p", 1200.0)]
        );
    }

    #[test]
    fn unknown_quality_goes_last() {
        let mut odd = video("hd-ish", 9000.0);
        let input = vec![odd.clone(), video("144p", 10.0)];
        let sorted = sort_video_variants(&input);
        assert_eq!(qualities(&sorted), ["144p", "hd-ish"]);

        odd.quality = None;
        let sorted = sort_video_variants(&[odd, video("240p", 1.0)]);
        assert_eq!(qualities(&sorted), ["240p", "-"]);
    }

    #[test]
    fn audio_by_bitrate_descending() {
        let input: Vec<AudioVariant> = [48.0, 160.0, 128.0]
            .into_iter()
            .map(|b| AudioVariant {
                bitrate: Some(b),
                ..Default::default()
            })
            .chain(std::iter::once(AudioVariant::default()))
            .collect();
        let sorted = sort_audio_variants(&input);
        let bitrates: Vec<Option<f64>> = sorted.iter().map(|a| a.bitrate).collect();
        assert_eq!(bitrates, [Some(160.0), Some(128.0), Some(48.0), None]);
    }

    #[test]
    fn subtitles_by_language() {
        let input: Vec<SubtitleVariant> = [Some("pt-BR"), None, Some("en"), Some("De"), Some("de")]
            .into_iter()
            .map(|lang| SubtitleVariant {
                lang: lang.map(str::to_string),
                ..Default::default()
            })
            .collect();
        let sorted = sort_subtitle_variants(&input);
        let langs: Vec<Option<&str>> = sorted.iter().map(|s| s.lang.as_deref()).collect();
        assert_eq!(langs, [Some("De"), Some("de"), Some("en"), Some("pt-BR"), None]);
    }
}
