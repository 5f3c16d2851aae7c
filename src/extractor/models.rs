//! Data structures for the metadata API payload
//!
//! Every field is optional: the API omits keys freely and sometimes sends
//! numbers as floats or strings. Absent values stay `None` and are rendered
//! as a placeholder by the formatter.

use crate::utils::error::TubelensError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level response body.
///
/// Two layouts are in use: `{"response": {...}}` and
/// `{"output": {"data": {...}}}`. A top-level `error` wins over both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default, deserialize_with = "error_message")]
    pub error: Option<String>,
    #[serde(default)]
    pub response: Option<ApiPayload>,
    #[serde(default)]
    pub output: Option<ApiOutput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiOutput {
    #[serde(default)]
    pub data: Option<ApiPayload>,
}

/// Info and media for one video
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiPayload {
    #[serde(default)]
    pub info: VideoMetadata,
    #[serde(default)]
    pub media: MediaVariants,
}

impl ApiEnvelope {
    /// An envelope that only carries an error, as produced locally for
    /// failures that never reached the API.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn from_payload(payload: ApiPayload) -> Self {
        Self {
            response: Some(payload),
            ..Default::default()
        }
    }

    /// Resolve the envelope into its payload.
    ///
    /// The error flag is checked before anything else is touched.
    pub fn into_payload(self) -> Result<ApiPayload, TubelensError> {
        if let Some(message) = self.error {
            return Err(TubelensError::UpstreamError(message));
        }
        self.response
            .or_else(|| self.output.and_then(|o| o.data))
            .ok_or_else(|| {
                TubelensError::FetchFailed("response did not contain video information".to_string())
            })
    }
}

/// General information about a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub short_url: Option<String>,
    /// Fallback for `short_url`
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    /// Fallback for `channel_name`
    #[serde(default)]
    pub channel: Option<String>,
    /// Seconds
    #[serde(default, deserialize_with = "lenient_u64")]
    pub duration: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub likes: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub comments: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub is_age_restricted: Option<bool>,
    /// Epoch seconds
    #[serde(default, deserialize_with = "lenient_i64")]
    pub upload_date: Option<i64>,
}

impl VideoMetadata {
    pub fn canonical_url(&self) -> Option<&str> {
        non_empty(self.short_url.as_deref()).or_else(|| non_empty(self.url.as_deref()))
    }

    pub fn channel_display(&self) -> Option<&str> {
        non_empty(self.channel_name.as_deref()).or_else(|| non_empty(self.channel.as_deref()))
    }

    pub fn age_restricted(&self) -> bool {
        self.is_age_restricted.unwrap_or(false)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Media variant lists; absent lists are empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaVariants {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub video: Vec<VideoVariant>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audio: Vec<AudioVariant>,
    #[serde(default, alias = "subtitle", deserialize_with = "null_as_empty")]
    pub subtitles: Vec<SubtitleVariant>,
}

impl MediaVariants {
    pub fn is_empty(&self) -> bool {
        self.video.is_empty() && self.audio.is_empty() && self.subtitles.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoVariant {
    /// Resolution label such as "1080p"
    #[serde(default)]
    pub quality: Option<String>,
    /// kbps
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bitrate: Option<f64>,
    #[serde(default)]
    pub codec: Option<String>,
    /// Bytes
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioVariant {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bitrate: Option<f64>,
    #[serde(default)]
    pub codec: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleVariant {
    /// Language code
    #[serde(default)]
    pub lang: Option<String>,
    /// File extension (vtt, srt, ...)
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// ============================================================
// Lenient field decoding
// ============================================================

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u64))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value).map(|n| n.round() as i64))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `"message"`, `true`, `{"message": "..."}`; `null`/`false`/`""` mean no error
fn error_message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Object(map)) => Some(
            map.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
        ),
        Some(Value::Bool(true)) => Some("Unknown error".to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_response_layout() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "response": {
                "info": {
                    "short_url": "https://youtu.be/dQw4w9WgXcQ",
                    "id": "dQw4w9WgXcQ",
                    "title": "Never Gonna Give You Up",
                    "channel_name": "Rick Astley",
                    "duration": 213,
                    "views": 1500000000u64,
                    "tags": ["rick", "astley"],
                    "categories": ["Music"],
                    "is_age_restricted": false,
                    "upload_date": 1256453853
                },
                "media": {
                    "video": [{ "quality": "1080p", "bitrate": 4500.5, "codec": "avc1", "size": 1024, "url": "https://v/1" }],
                    "audio": [{ "bitrate": 128, "codec": "opus", "size": "2048", "url": "https://a/1" }]
                }
            }
        }))
        .unwrap();

        let payload = envelope.into_payload().unwrap();
        assert_eq!(payload.info.title.as_deref(), Some("Never Gonna Give You Up"));
        assert_eq!(payload.info.duration, Some(213));
        assert_eq!(payload.info.upload_date, Some(1256453853));
        assert_eq!(payload.media.video[0].bitrate, Some(4500.5));
        assert_eq!(payload.media.audio[0].size, Some(2048));
        assert!(payload.media.subtitles.is_empty());
    }

    #[test]
    fn decodes_output_data_layout() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "output": { "data": {
                "info": { "title": "Nested" },
                "media": { "subtitles": [{ "lang": "en", "ext": "vtt", "url": "https://s/en" }] }
            }}
        }))
        .unwrap();

        let payload = envelope.into_payload().unwrap();
        assert_eq!(payload.info.title.as_deref(), Some("Nested"));
        assert_eq!(payload.media.subtitles.len(), 1);
    }

    #[test]
    fn error_field_takes_precedence() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "error": "Video unavailable",
            "response": { "info": { "title": "ignored" } }
        }))
        .unwrap();

        match envelope.into_payload() {
            Err(TubelensError::UpstreamError(msg)) => assert_eq!(msg, "Video unavailable"),
            other => panic!("expected UpstreamError, got {:?}", other),
        }
    }

    #[test]
    fn error_field_variants() {
        let parse = |v: Value| serde_json::from_value::<ApiEnvelope>(v).unwrap().error;
        assert_eq!(parse(json!({ "error": null })), None);
        assert_eq!(parse(json!({ "error": false })), None);
        assert_eq!(parse(json!({ "error": "" })), None);
        assert_eq!(parse(json!({ "error": true })).as_deref(), Some("Unknown error"));
        assert_eq!(
            parse(json!({ "error": { "message": "quota exceeded", "code": 429 } })).as_deref(),
            Some("quota exceeded")
        );
    }

    #[test]
    fn empty_envelope_is_a_fetch_failure() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(envelope.into_payload(), Err(TubelensError::FetchFailed(_))));
    }

    #[test]
    fn nulls_and_garbage_become_none() {
        let info: VideoMetadata = serde_json::from_value(json!({
            "title": null,
            "tags": null,
            "views": "n/a",
            "likes": -5,
            "duration": "61.4"
        }))
        .unwrap();
        assert_eq!(info.title, None);
        assert!(info.tags.is_empty());
        assert_eq!(info.views, None);
        assert_eq!(info.likes, None);
        assert_eq!(info.duration, Some(61));
    }

    #[test]
    fn fallbacks_for_url_and_channel() {
        let info = VideoMetadata {
            url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".into()),
            short_url: Some("  ".into()),
            channel: Some("Rick Astley".into()),
            ..Default::default()
        };
        assert_eq!(info.canonical_url(), Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert_eq!(info.channel_display(), Some("Rick Astley"));
        assert!(!info.age_restricted());
    }
}
