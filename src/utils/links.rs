//! Hand links to the host's default handler instead of navigating in-app

use crate::utils::error::TubelensError;
use tracing::{info, warn};

/// Only web links are forwarded; anything else (file://, javascript:, ...)
/// is refused before it reaches the OS.
pub fn is_openable(link: &str) -> bool {
    let lower = link.trim().to_ascii_lowercase();
    let host = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    matches!(host, Some(rest) if !rest.is_empty())
}

/// Open a direct media URL or external page with the system handler
pub fn open_external(link: &str) -> Result<(), TubelensError> {
    if !is_openable(link) {
        warn!("Refusing to open non-web link: {}", link);
        return Err(TubelensError::LinkOpen(format!("unsupported link: {}", link)));
    }

    info!("Opening external link: {}", link);
    open::that_detached(link.trim()).map_err(|e| TubelensError::LinkOpen(e.to_string()))
}
