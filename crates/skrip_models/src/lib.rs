//! Generation backend integrations for Skrip.
//!
//! Each provider lives behind its own feature flag. Today that is only
//! Google Gemini (`gemini`, on by default), which serves both script
//! generation and scene images.
//!
//! # Example
//!
//! ```no_run
//! use skrip_core::{ApiKey, GenerationRequest, SkripConfig};
//! use skrip_interface::ContentGenerator;
//! use skrip_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SkripConfig::load(None)?;
//! let client = GeminiClient::from_config(ApiKey::from_env()?, &config);
//! let scripts = client.generate_scripts(&GenerationRequest::default()).await?;
//! println!("{} scripts", scripts.len());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;
