//! Generated image payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// One image returned by the backend, kept base64-encoded as received.
///
/// # Examples
///
/// ```
/// use skrip_core::GeneratedImage;
///
/// let image = GeneratedImage::new("image/png", "aGVsbG8=");
/// assert_eq!(image.data_uri(), "data:image/png;base64,aGVsbG8=");
/// assert_eq!(image.decode().unwrap(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// MIME type reported by the backend
    mime_type: String,
    /// Image bytes, base64 (standard alphabet, padded)
    data_base64: String,
}

impl GeneratedImage {
    /// Wrap an already-encoded image.
    pub fn new(mime_type: impl Into<String>, data_base64: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data_base64: data_base64.into(),
        }
    }

    /// `data:` URI suitable for an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data_base64)
    }

    /// Decode the raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.data_base64.as_bytes())
    }

    /// File extension matching the MIME type, for downloads.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}
