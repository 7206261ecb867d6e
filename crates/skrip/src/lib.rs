//! Skrip - AI content-idea script generator
//!
//! Pick a category, a content type, a platform format and how many ideas you
//! want; Skrip asks Gemini for that many distinct video scripts, each split
//! into scenes with a stick-figure image prompt and an audio description.
//! Any scene's prompt can then be rendered into an image.
//!
//! # Architecture
//!
//! - `skrip_error` - Error types
//! - `skrip_core` - Vocabulary, requests, scripts, prompt and schema, configuration
//! - `skrip_interface` - The `ContentGenerator` trait
//! - `skrip_models` - Gemini implementation (feature `gemini`)
//! - `skrip_server` - Studio state and the browser-facing HTTP API
//!
//! This crate re-exports everything and provides the `skrip` binary.

pub mod cli;
pub mod telemetry;

pub use skrip_core::*;
pub use skrip_error::*;
pub use skrip_interface::*;
pub use skrip_server::*;

#[cfg(feature = "gemini")]
pub use skrip_models::*;
