use crate::extractor::models::ApiEnvelope;
use crate::extractor::video_id::VideoReference;
use crate::utils::error::TubelensError;
use async_trait::async_trait;

/// Where video metadata comes from
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Short name used in logs
    fn id(&self) -> &'static str;

    /// Fetch the raw payload for one video.
    ///
    /// Transport problems and non-success statuses surface as
    /// [`TubelensError::FetchFailed`]. A payload-level error flag is *not* an
    /// error here; it is returned inside the envelope for the formatter.
    async fn fetch(&self, video: &VideoReference) -> Result<ApiEnvelope, TubelensError>;
}
