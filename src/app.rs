//! Lookup pipeline: URL -> identifier -> remote metadata -> report

use crate::extractor::{extract_video_id, ApiClient, ApiEnvelope, MetadataSource};
use crate::formatter::units::resolve_locale;
use crate::formatter::{report_from_envelope, Report, ReportOptions};
use crate::utils::config::AppSettings;
use crate::utils::error::TubelensError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs one lookup per call. Cheap to clone; clones share the source.
#[derive(Clone)]
pub struct Inspector {
    source: Arc<dyn MetadataSource>,
    options: ReportOptions,
}

impl Inspector {
    pub fn new(source: Arc<dyn MetadataSource>, options: ReportOptions) -> Self {
        Self { source, options }
    }

    /// Remote API source plus the user's date locale
    pub fn from_settings(settings: &AppSettings) -> Result<Self, TubelensError> {
        let client = ApiClient::from_settings(settings)?;
        let options = ReportOptions {
            locale: resolve_locale(settings.locale.as_deref()),
            utc: false,
        };
        Ok(Self::new(Arc::new(client), options))
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Extract the identifier and fetch the raw payload.
    ///
    /// Nothing goes over the network for an unrecognized URL.
    pub async fn lookup(&self, url: &str) -> Result<ApiEnvelope, TubelensError> {
        let video = extract_video_id(url.trim())?;
        debug!("Routing {} to source {}", video, self.source.id());
        self.source.fetch(&video).await
    }

    /// Full lookup, with every failure folded into the report
    pub async fn inspect(&self, url: &str) -> Report {
        let report = match self.lookup(url).await {
            Ok(envelope) => report_from_envelope(envelope, &self.options),
            Err(err) => {
                warn!("Lookup for {:?} failed: {}", url, err);
                Report::failure(&err)
            }
        };
        if let Report::Video(_) = &report {
            info!("Lookup for {:?} completed", url);
        }
        report
    }
}
