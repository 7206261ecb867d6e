//! Errors raised while assembling a generation request.

/// Specific request validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// Requested number of scripts is outside the supported range
    #[display("Script count {} is outside {}..={}", count, min, max)]
    CountOutOfRange {
        /// Requested count
        count: u32,
        /// Smallest accepted count
        min: u32,
        /// Largest accepted count
        max: u32,
    },
}

/// Request error with location tracking.
///
/// # Examples
///
/// ```
/// use skrip_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::CountOutOfRange { count: 9, min: 1, max: 5 });
/// assert!(err.to_string().contains("Script count 9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The kind of error that occurred
    pub kind: RequestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
