//! Video identifier extraction from user-supplied URLs

use crate::utils::error::TubelensError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Length of a video identifier token
pub const VIDEO_ID_LEN: usize = 11;

// Recognized shapes:
//   youtube.com/watch?v=ID (and any other path carrying a `v=` query parameter)
//   youtube.com/v/ID, youtube.com/e/ID, youtube.com/embed/ID, youtube.com/shorts/ID
//   youtube.com/<segment>/<anything>/ID
//   youtu.be/ID
// youtube-nocookie.com takes the same paths as youtube.com. The host must open
// the input (after an optional scheme and subdomains), so a YouTube URL
// nested in another site's path or query is not accepted.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:[a-zA-Z0-9-]+\.)*(?:youtube(?:-nocookie)?\.com/(?:shorts/|(?:v|e(?:mbed)?)/|[^/\s]+/\S+/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("video URL pattern is valid")
});

/// A validated video identifier token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoReference(String);

impl VideoReference {
    /// Wrap a bare token, checking its length and alphabet
    pub fn from_token(token: &str) -> Option<Self> {
        if token.len() == VIDEO_ID_LEN && token.bytes().all(is_token_byte) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    pub fn short_url(&self) -> String {
        format!("https://youtu.be/{}", self.0)
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Derive the video identifier from a free-form URL.
///
/// Never panics; any input that is not one of the supported URL shapes
/// yields [`TubelensError::InvalidUrl`].
pub fn extract_video_id(url: &str) -> Result<VideoReference, TubelensError> {
    match VIDEO_URL_RE.captures(url.trim()).and_then(|caps| caps.get(1)) {
        Some(token) => {
            debug!("Extracted video id {} from {}", token.as_str(), url);
            Ok(VideoReference(token.as_str().to_string()))
        }
        None => {
            debug!("No video id found in {:?}", url);
            Err(TubelensError::InvalidUrl(url.to_string()))
        }
    }
}
