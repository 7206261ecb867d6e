//! The generation backend seam.

use async_trait::async_trait;
use skrip_core::{GeneratedImage, GenerationRequest, PlatformFormat, Script};
use skrip_error::{GenerationError, ImageGenerationError};

/// A backend that writes script ideas and illustrates their scenes.
///
/// Both operations are single, independent network calls: no retry, no
/// caching, no shared session state beyond the credential the implementor
/// was constructed with.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate `request.count()` distinct scripts.
    ///
    /// An empty result is returned as `Ok(vec![])`, never as an error.
    async fn generate_scripts(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Script>, GenerationError>;

    /// Illustrate one scene from its visual prompt, shaped for `platform`.
    async fn generate_image(
        &self,
        prompt: &str,
        platform: PlatformFormat,
    ) -> Result<GeneratedImage, ImageGenerationError>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for script generation.
    fn model_name(&self) -> &str;
}
