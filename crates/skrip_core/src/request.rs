//! The per-click generation request.

use crate::{Category, ContentType, PlatformFormat};
use serde::{Deserialize, Serialize};
use skrip_error::{RequestError, RequestErrorKind};

/// Fewest scripts one request may ask for.
pub const MIN_SCRIPT_COUNT: u32 = 1;

/// Most scripts one request may ask for.
pub const MAX_SCRIPT_COUNT: u32 = 5;

/// The four user selections behind one "generate" action.
///
/// Only constructible through [`GenerationRequest::new`] (deserialization
/// goes through the same check), so `count` is always within
/// [`MIN_SCRIPT_COUNT`]..=[`MAX_SCRIPT_COUNT`].
///
/// # Examples
///
/// ```
/// use skrip_core::{Category, ContentType, GenerationRequest, PlatformFormat};
///
/// let request = GenerationRequest::new(
///     Category::General,
///     ContentType::Tips,
///     PlatformFormat::Short,
///     2,
/// )?;
/// assert_eq!(*request.count(), 2);
///
/// assert!(GenerationRequest::new(Category::General, ContentType::Tips, PlatformFormat::Short, 6).is_err());
/// # Ok::<(), skrip_error::RequestError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(try_from = "RawGenerationRequest")]
pub struct GenerationRequest {
    /// Main topic
    category: Category,
    /// Kind of video
    content_type: ContentType,
    /// Target platform
    platform_format: PlatformFormat,
    /// Number of distinct scripts to produce
    count: u32,
}

impl GenerationRequest {
    /// Validate and assemble a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::CountOutOfRange`] when `count` is outside
    /// the supported range. Out-of-range counts are rejected, never clamped.
    #[track_caller]
    pub fn new(
        category: Category,
        content_type: ContentType,
        platform_format: PlatformFormat,
        count: u32,
    ) -> Result<Self, RequestError> {
        if !(MIN_SCRIPT_COUNT..=MAX_SCRIPT_COUNT).contains(&count) {
            return Err(RequestError::new(RequestErrorKind::CountOutOfRange {
                count,
                min: MIN_SCRIPT_COUNT,
                max: MAX_SCRIPT_COUNT,
            }));
        }
        Ok(Self {
            category,
            content_type,
            platform_format,
            count,
        })
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            category: Category::default(),
            content_type: ContentType::default(),
            platform_format: PlatformFormat::default(),
            count: MIN_SCRIPT_COUNT,
        }
    }
}

#[derive(Deserialize)]
struct RawGenerationRequest {
    category: Category,
    content_type: ContentType,
    platform_format: PlatformFormat,
    count: u32,
}

impl TryFrom<RawGenerationRequest> for GenerationRequest {
    type Error = RequestError;

    fn try_from(raw: RawGenerationRequest) -> Result<Self, Self::Error> {
        Self::new(
            raw.category,
            raw.content_type,
            raw.platform_format,
            raw.count,
        )
    }
}
