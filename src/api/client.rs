//! HTTP client for the remote extraction API
//!
//! One GET per extraction: the video URL travels as a percent-encoded `url`
//! query parameter and the success body is `{ "data": { ... } }`. Every
//! failure class (transport, timeout, bad status, bad shape) surfaces as an
//! [`ExtractError`].

use crate::api::error::ExtractError;
use crate::api::models::{ApiEnvelope, ExtractionResult};
use crate::config::AppConfig;
use tracing::{debug, warn};

/// Client for the fixed extraction endpoint
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ExtractionClient {
    /// Build a client with the configured endpoint and request timeout.
    pub fn new(config: &AppConfig) -> Result<Self, ExtractError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Extract metadata and stream variants for `video_url`.
    ///
    /// The input is passed through verbatim; the endpoint decides whether it
    /// is a URL it can handle.
    pub async fn extract(&self, video_url: &str) -> Result<ExtractionResult, ExtractError> {
        debug!(url = %video_url, "requesting extraction");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", video_url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "extraction endpoint returned error status");
            return Err(ExtractError::Status(status.as_u16()));
        }

        // Parse-don't-trust: any shape mismatch is a failure, not a crash.
        let body = response.text().await?;
        let envelope: ApiEnvelope = serde_json::from_str(&body)
            .map_err(|e| ExtractError::MalformedResponse(e.to_string()))?;

        debug!(
            title = %envelope.data.video_details.title,
            variants = envelope.data.streaming_details.len(),
            "extraction succeeded"
        );

        Ok(envelope.data)
    }

    /// Fetch raw thumbnail bytes, decoding them to confirm they are an image.
    ///
    /// Thumbnail failures are non-fatal to the caller, so this returns
    /// `Option` rather than an error the GUI would have to surface.
    pub async fn fetch_thumbnail(&self, thumbnail_url: &str) -> Option<Vec<u8>> {
        let bytes = self
            .http
            .get(thumbnail_url)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?
            .bytes()
            .await
            .ok()?;

        if image::load_from_memory(&bytes).is_err() {
            debug!(url = %thumbnail_url, "thumbnail bytes are not a decodable image");
            return None;
        }

        Some(bytes.to_vec())
    }
}
