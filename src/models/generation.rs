use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Prefix of an inline image source carrying the PNG bytes directly.
pub const INLINE_PNG_PREFIX: &str = "data:image/png;base64,";

/// JSON payload returned by `POST /generate`.
///
/// `image_url` is mandatory; a body without it is a malformed response.
/// `base64_image` is the inline fast path some deployments return alongside
/// the URL, and `status` is informational only.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub image_url: String,
    #[serde(default)]
    pub base64_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateResponse {
    /// The source string to display: the inline data URL when the payload
    /// carries the image bytes, otherwise the served URL.
    pub fn image_source(&self) -> String {
        match &self.base64_image {
            Some(b64) => format!("{}{}", INLINE_PNG_PREFIX, b64),
            None => self.image_url.clone(),
        }
    }
}

/// Suggested filename for a saved image: a fixed prefix plus the moment of
/// the download in milliseconds since the Unix epoch.
pub fn download_filename(at: DateTime<Utc>) -> String {
    format!("stable-diffusion-{}.png", at.timestamp_millis())
}
