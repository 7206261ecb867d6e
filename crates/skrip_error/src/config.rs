//! Startup configuration errors.

/// What went wrong while assembling configuration or the credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// None of the credential variables holds a value
    #[display("None of {} is set", variables)]
    MissingApiKey {
        /// Variables consulted, in order
        variables: String,
    },
    /// The credential is empty or whitespace
    #[display("API key is blank")]
    BlankApiKey,
    /// A configuration source could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Build(String),
    /// Merged configuration does not fit the settings types
    #[display("Failed to parse configuration: {}", _0)]
    Deserialize(String),
}

/// Configuration error with location tracking.
///
/// Every kind is fatal at startup: the studio never binds without a key
/// and readable settings.
///
/// # Examples
///
/// ```
/// use skrip_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingApiKey {
///     variables: "GEMINI_API_KEY, API_KEY".to_string(),
/// });
/// assert!(err.to_string().contains("GEMINI_API_KEY"));
/// assert!(matches!(err.kind, ConfigErrorKind::MissingApiKey { .. }));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Skrip config: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
