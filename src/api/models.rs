//! Data structures for extraction API responses

use serde::{Deserialize, Serialize};

/// Video metadata returned by the extraction API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub title: String,
    /// Part of the wire contract; not rendered.
    #[serde(default)]
    pub duration: String,
    /// Thumbnail URL. May be empty.
    #[serde(default)]
    pub thumbnail: String,
}

/// One downloadable/playable rendition of the source video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamVariant {
    pub url: String,
    /// Human-readable size, e.g. "5MB".
    pub content_length: String,
    pub quality: String,
}

/// Successful extraction payload
///
/// `streaming_details` is quality-ranked; the first element is the default
/// variant. The sequence may be empty, so access to the first variant goes
/// through [`ExtractionResult::best_variant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub video_details: VideoDetails,
    #[serde(default)]
    pub streaming_details: Vec<StreamVariant>,
}

impl ExtractionResult {
    /// The default/best stream variant, if any were returned.
    pub fn best_variant(&self) -> Option<&StreamVariant> {
        self.streaming_details.first()
    }
}

/// Raw success body: `{ "data": { ... } }`
///
/// Unwrapped at the client boundary; never escapes the api module.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    pub data: ExtractionResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_wire_shape() {
        let body = r#"{
            "data": {
                "videoDetails": {
                    "title": "T",
                    "duration": "1:00",
                    "thumbnail": "http://x/y.jpg"
                },
                "streamingDetails": [
                    {"url": "http://x/v.mp4", "contentLength": "5MB", "quality": "720p"}
                ]
            }
        }"#;

        let envelope: ApiEnvelope = serde_json::from_str(body).expect("parse");
        let result = envelope.data;
        assert_eq!(result.video_details.title, "T");
        assert_eq!(result.video_details.thumbnail, "http://x/y.jpg");
        assert_eq!(result.best_variant().unwrap().content_length, "5MB");
        assert_eq!(result.best_variant().unwrap().quality, "720p");
    }

    #[test]
    fn test_empty_streaming_details_is_accepted() {
        let body = r#"{
            "data": {
                "videoDetails": {"title": "T", "duration": "", "thumbnail": ""},
                "streamingDetails": []
            }
        }"#;

        let envelope: ApiEnvelope = serde_json::from_str(body).expect("parse");
        assert!(envelope.data.best_variant().is_none());
    }

    #[test]
    fn test_missing_video_details_is_rejected() {
        let body = r#"{"data": {"streamingDetails": []}}"#;
        assert!(serde_json::from_str::<ApiEnvelope>(body).is_err());
    }
}
