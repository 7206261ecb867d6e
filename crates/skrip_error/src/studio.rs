//! Errors raised by the browser-facing studio state.

/// Addressing failures against the current script list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StudioErrorKind {
    /// No script at this index in the current list
    #[display("Script {} does not exist", _0)]
    UnknownScript(usize),
    /// No scene at this index in the addressed script
    #[display("Scene {} of script {} does not exist", scene, script)]
    UnknownScene {
        /// Script index
        script: usize,
        /// Scene index
        scene: usize,
    },
    /// The scene has no finished image to hand out
    #[display("Image for scene {} of script {} is not ready", scene, script)]
    ImageNotReady {
        /// Script index
        script: usize,
        /// Scene index
        scene: usize,
    },
}

/// Studio error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The kind of error that occurred
    pub kind: StudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StudioError {
    /// Create a new StudioError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
