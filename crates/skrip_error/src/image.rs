//! Per-scene image generation errors.

/// Generic message when the backend gives nothing better to show.
pub const IMAGE_FAILURE_MESSAGE: &str = "Gagal membuat gambar. Silakan coba lagi.";

/// Image generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageGenerationErrorKind {
    /// Transport-level failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Backend rejected the request
    #[display("HTTP {} error: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message reported by the backend
        message: String,
    },
    /// Response envelope did not match the predict format
    #[display("Unexpected response envelope: {}", _0)]
    InvalidEnvelope(String),
    /// Backend returned no image, optionally with the reason it was filtered
    #[display("No image returned{}", _0.as_ref().map(|r| format!(": {r}")).unwrap_or_default())]
    NoImage(Option<String>),
    /// Returned bytes were not valid base64
    #[display("Invalid image data: {}", _0)]
    InvalidImage(String),
}

/// Image generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use skrip_error::{ImageGenerationError, ImageGenerationErrorKind, IMAGE_FAILURE_MESSAGE};
///
/// let err = ImageGenerationError::new(ImageGenerationErrorKind::Api {
///     status_code: 400,
///     message: "Prompt contains blocked words".to_string(),
/// });
/// assert_eq!(err.user_message(), "Prompt contains blocked words");
///
/// let err = ImageGenerationError::new(ImageGenerationErrorKind::Http("timed out".into()));
/// assert_eq!(err.user_message(), IMAGE_FAILURE_MESSAGE);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Generation Error: {} at line {} in {}", kind, line, file)]
pub struct ImageGenerationError {
    /// The kind of error that occurred
    pub kind: ImageGenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageGenerationError {
    /// Create a new ImageGenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageGenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Message to show inline at the scene.
    ///
    /// Backend-provided explanations are passed through verbatim.
    pub fn user_message(&self) -> String {
        match &self.kind {
            ImageGenerationErrorKind::Api { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            ImageGenerationErrorKind::NoImage(Some(reason)) if !reason.trim().is_empty() => {
                reason.clone()
            }
            _ => IMAGE_FAILURE_MESSAGE.to_string(),
        }
    }
}
