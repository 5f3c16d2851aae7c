pub mod api;
pub mod models;
pub mod traits;
pub mod video_id;

pub use api::ApiClient;
pub use models::{
    ApiEnvelope, ApiPayload, AudioVariant, MediaVariants, SubtitleVariant, VideoMetadata,
    VideoVariant,
};
pub use traits::MetadataSource;
pub use video_id::{extract_video_id, VideoReference};
