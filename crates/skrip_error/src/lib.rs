//! Error types for the Skrip content-idea generator.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the source location that raised it
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! The generation errors also carry the user-facing message the browser shows,
//! so that parse failures and every other failure stay distinguishable all the
//! way to the screen.
//!
//! # Examples
//!
//! ```
//! use skrip_error::{ConfigError, ConfigErrorKind, SkripResult};
//!
//! fn load_key() -> SkripResult<String> {
//!     Err(ConfigError::new(ConfigErrorKind::BlankApiKey))?
//! }
//!
//! assert!(load_key().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod image;
mod request;
mod studio;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{SkripError, SkripErrorKind, SkripResult};
pub use generation::{
    EMPTY_RESULT_MESSAGE, GENERATION_FAILURE_MESSAGE, GenerationError, GenerationErrorKind,
    PARSE_FAILURE_MESSAGE,
};
pub use image::{IMAGE_FAILURE_MESSAGE, ImageGenerationError, ImageGenerationErrorKind};
pub use request::{RequestError, RequestErrorKind};
pub use studio::{StudioError, StudioErrorKind};
