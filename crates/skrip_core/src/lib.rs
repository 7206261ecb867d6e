//! Core data types for the Skrip content-idea generator.
//!
//! This crate holds the domain vocabulary the selection UI exposes, the
//! request builder that turns a selection into an instruction plus a
//! structured-output schema, the parser that turns the model's answer back
//! into [`Script`] records, and the layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod config;
mod content_type;
mod media;
mod platform;
mod prompt;
mod request;
mod schema;
mod script;

pub use category::Category;
pub use config::{
    API_KEY_VARS, ApiKey, GeminiSettings, ImageSettings, ServerSettings, SkripConfig,
};
pub use content_type::ContentType;
pub use media::GeneratedImage;
pub use platform::PlatformFormat;
pub use prompt::{ScriptPrompt, VISUAL_STYLE, platform_guidance};
pub use request::{GenerationRequest, MAX_SCRIPT_COUNT, MIN_SCRIPT_COUNT};
pub use schema::{SCENE_FIELDS, SCRIPT_FIELDS, script_response_schema};
pub use script::{Scene, Script, ScriptBatch};
