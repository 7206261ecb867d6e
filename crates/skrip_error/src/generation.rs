//! Script generation errors.

/// Shown when the backend answered but its payload could not be parsed.
pub const PARSE_FAILURE_MESSAGE: &str = "Gagal mem-parsing respons dari AI. Coba lagi.";

/// Shown for every other script generation failure.
pub const GENERATION_FAILURE_MESSAGE: &str = "Gagal menghasilkan skrip. Silakan coba lagi.";

/// Shown when the backend succeeded but produced zero scripts. Not an error.
pub const EMPTY_RESULT_MESSAGE: &str = "AI tidak dapat menghasilkan ide untuk saat ini. Coba lagi.";

/// Script generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Model output was not JSON of the declared shape
    #[display("Failed to parse model output: {}", _0)]
    Parse(String),
    /// Model output parsed but broke a script invariant
    #[display("Model output violates script contract: {}", _0)]
    InvalidScript(String),
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
    /// Response envelope did not match the generateContent format
    #[display("Unexpected response envelope: {}", _0)]
    InvalidEnvelope(String),
    /// Backend returned no candidate text (blocked or empty)
    #[display("Model returned no content: {}", _0)]
    NoContent(String),
}

impl GenerationErrorKind {
    /// Whether this failure is a parse failure of the model's answer.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::Parse(_) | GenerationErrorKind::InvalidScript(_)
        )
    }
}

/// Script generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use skrip_error::{GenerationError, GenerationErrorKind, PARSE_FAILURE_MESSAGE};
///
/// let err = GenerationError::new(GenerationErrorKind::Parse("expected value".into()));
/// assert!(err.is_parse_failure());
/// assert_eq!(err.user_message(), PARSE_FAILURE_MESSAGE);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this is a parse failure rather than a generation failure.
    pub fn is_parse_failure(&self) -> bool {
        self.kind.is_parse_failure()
    }

    /// Message to show the user for this failure.
    pub fn user_message(&self) -> &'static str {
        if self.is_parse_failure() {
            PARSE_FAILURE_MESSAGE
        } else {
            GENERATION_FAILURE_MESSAGE
        }
    }
}
