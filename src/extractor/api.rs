//! HTTP client for the remote metadata API
//!
//! One GET per lookup: `<endpoint>?<param>=<video id>`. No retries and no
//! timeout beyond the client defaults; a failure ends that lookup.

use crate::extractor::models::ApiEnvelope;
use crate::extractor::traits::MetadataSource;
use crate::extractor::video_id::VideoReference;
use crate::utils::config::AppSettings;
use crate::utils::error::TubelensError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, info};

/// Metadata source backed by the remote API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Url,
    id_param: String,
}

impl ApiClient {
    pub fn new(endpoint: &str, id_param: &str) -> Result<Self, TubelensError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TubelensError::Config(format!("invalid api endpoint {:?}: {}", endpoint, e)))?;
        let client = Client::builder()
            .user_agent(concat!("tubelens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TubelensError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            id_param: id_param.to_string(),
        })
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, TubelensError> {
        settings.validate()?;
        Self::new(&settings.api_endpoint, &settings.id_query_param)
    }

    /// Full request URL for a video; existing query parameters on the
    /// endpoint are kept.
    pub fn request_url(&self, video: &VideoReference) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.id_param, video.as_str());
        url
    }
}

#[async_trait]
impl MetadataSource for ApiClient {
    fn id(&self) -> &'static str {
        "remote-api"
    }

    async fn fetch(&self, video: &VideoReference) -> Result<ApiEnvelope, TubelensError> {
        let url = self.request_url(video);
        info!("Requesting metadata for {} from {}", video, self.endpoint);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Metadata request for {} failed: {}", video, e);
            TubelensError::FetchFailed(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("Metadata API answered {} for {}", status, video);
            return Err(TubelensError::FetchFailed(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        debug!("Received {} bytes for {}", body.len(), video);

        serde_json::from_str::<ApiEnvelope>(&body).map_err(|e| {
            error!("Undecodable metadata payload for {}: {}", video, e);
            TubelensError::FetchFailed(format!("invalid response body: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_appends_identifier() {
        let client = ApiClient::new("http://api.example.com:8452/api/v1/video", "id").unwrap();
        let video = VideoReference::from_token("dQw4w9WgXcQ").unwrap();
        assert_eq!(
            client.request_url(&video).as_str(),
            "http://api.example.com:8452/api/v1/video?id=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn request_url_keeps_existing_query() {
        let client = ApiClient::new("https://api.example.com/video?key=abc", "v").unwrap();
        let video = VideoReference::from_token("a-b_c-d_e-f").unwrap();
        assert_eq!(
            client.request_url(&video).as_str(),
            "https://api.example.com/video?key=abc&v=a-b_c-d_e-f"
        );
    }

    #[test]
    fn rejects_bad_endpoint() {
        assert!(matches!(
            ApiClient::new("::not a url::", "id"),
            Err(TubelensError::Config(_))
        ));
    }
}
