//! Unit conversions for display: byte sizes, durations, bitrates, dates

use chrono::{DateTime, Locale, TimeZone};
use std::fmt::Display;
use tracing::debug;

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Binary (1024-based) size with the magnitude rounded to an integer.
///
/// The unit is the largest one in which the value is still at least 1;
/// anything past TB stays in TB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Byte".to_string();
    }

    let mut exponent = 0;
    while exponent + 1 < BYTE_UNITS.len() && bytes >= 1u64 << (10 * (exponent + 1)) {
        exponent += 1;
    }

    let scaled = bytes as f64 / (1u64 << (10 * exponent)) as f64;
    format!("{} {}", scaled.round(), BYTE_UNITS[exponent])
}

/// Zero-padded HH:MM:SS; hours keep growing past 99
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Bitrate without a trailing ".0" for whole numbers
pub fn format_bitrate(kbps: f64) -> String {
    kbps.to_string()
}

/// Calendar date for an epoch-seconds timestamp in the given zone.
///
/// With a locale the date uses that locale's short date format; without one
/// it falls back to ISO `YYYY-MM-DD`. Out-of-range timestamps yield `None`.
pub fn format_upload_date<Tz>(epoch_seconds: i64, zone: &Tz, locale: Option<Locale>) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = DateTime::from_timestamp(epoch_seconds, 0)?.with_timezone(zone);
    Some(match locale {
        Some(locale) => date.format_localized("%x", locale).to_string(),
        None => date.format("%Y-%m-%d").to_string(),
    })
}

/// Resolve the locale used for dates: the configured name if any, otherwise
/// the system locale. Names like "pt-BR" or "en_US.UTF-8" are normalized.
pub fn resolve_locale(configured: Option<&str>) -> Option<Locale> {
    let name = match configured {
        Some(name) => name.to_string(),
        None => sys_locale::get_locale()?,
    };
    let locale = parse_locale(&name);
    if locale.is_none() {
        debug!("Unknown locale {:?}, using ISO dates", name);
    }
    locale
}

fn parse_locale(name: &str) -> Option<Locale> {
    let normalized = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");
    if normalized.is_empty() {
        return None;
    }
    Locale::try_from(normalized.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn bytes_examples() {
        assert_eq!(format_bytes(0), "0 Byte");
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1500), "1 KB");
        assert_eq!(format_bytes(1536), "2 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_bytes(1u64 << 40), "1 TB");
    }

    #[test]
    fn bytes_beyond_terabytes_stay_in_tb() {
        assert_eq!(format_bytes(1u64 << 50), "1024 TB");
        assert!(format_bytes(u64::MAX).ends_with(" TB"));
    }

    #[test]
    fn duration_examples() {
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(213), "00:03:33");
        assert_eq!(format_duration(360_000), "100:00:00");
    }

    #[test]
    fn bitrate_trims_whole_numbers() {
        assert_eq!(format_bitrate(128.0), "128");
        assert_eq!(format_bitrate(4500.5), "4500.5");
    }

    #[test]
    fn upload_date_iso_fallback() {
        assert_eq!(
            format_upload_date(1_256_453_853, &Utc, None).as_deref(),
            Some("2009-10-25")
        );
        assert_eq!(format_upload_date(0, &Utc, None).as_deref(), Some("1970-01-01"));
    }

    #[test]
    fn upload_date_localized_mentions_year() {
        let locale = parse_locale("en_US").expect("en_US is a known locale");
        let rendered = format_upload_date(1_256_453_853, &Utc, Some(locale)).unwrap();
        assert!(rendered.contains("10"), "{}", rendered);
        assert!(rendered.contains("25"), "{}", rendered);
    }

    #[test]
    fn upload_date_out_of_range() {
        assert_eq!(format_upload_date(i64::MAX, &Utc, None), None);
    }

    #[test]
    fn locale_names_are_normalized() {
        assert!(parse_locale("pt-BR").is_some());
        assert!(parse_locale("en_US.UTF-8").is_some());
        assert!(parse_locale("").is_none());
        assert!(parse_locale("xx_NOPE").is_none());
        assert!(resolve_locale(Some("de_DE")).is_some());
    }
}
