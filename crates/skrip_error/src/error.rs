//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, ImageGenerationError, RequestError, StudioError};

/// Union of every error the workspace raises.
///
/// # Examples
///
/// ```
/// use skrip_error::{ConfigError, ConfigErrorKind, SkripError};
///
/// let err: SkripError = ConfigError::new(ConfigErrorKind::BlankApiKey).into();
/// assert!(format!("{}", err).contains("Skrip config"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SkripErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Invalid generation request
    #[from(RequestError)]
    Request(RequestError),
    /// Script generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Scene image generation error
    #[from(ImageGenerationError)]
    Image(ImageGenerationError),
    /// Studio addressing error
    #[from(StudioError)]
    Studio(StudioError),
}

/// Skrip error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Skrip Error: {}", _0)]
pub struct SkripError(Box<SkripErrorKind>);

impl SkripError {
    /// Create a new error from a kind.
    pub fn new(kind: SkripErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SkripErrorKind {
        &self.0
    }
}

impl<T> From<T> for SkripError
where
    T: Into<SkripErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Skrip operations.
pub type SkripResult<T> = std::result::Result<T, SkripError>;
