//! Google Gemini API implementation.
//!
//! One [`GeminiClient`] serves both operations of [`ContentGenerator`]:
//!
//! - **Scripts** go to `models/{model}:generateContent` with
//!   `responseMimeType: application/json` and the schema from
//!   [`ScriptPrompt`]. The answer is parsed and validated by
//!   [`ScriptBatch::parse`].
//! - **Scene images** go to `models/{image_model}:predict` with the visual
//!   prompt as-is and the platform's aspect ratio.
//!
//! Every call is a single attempt. There is no retry, no cache and no
//! client-side timeout; a call runs until the backend answers or fails.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use skrip_core::{
    ApiKey, GeminiSettings, GeneratedImage, GenerationRequest, ImageSettings, PlatformFormat,
    Script, ScriptBatch, ScriptPrompt, SkripConfig,
};
use skrip_error::{
    GenerationError, GenerationErrorKind, ImageGenerationError, ImageGenerationErrorKind,
};
use skrip_interface::ContentGenerator;

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, OutputOptions,
    PredictInstance, PredictParameters, PredictRequest, PredictResponse, api_error_message,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Raw outcome of one POST: status code and body text.
type RawResponse = (reqwest::StatusCode, String);

/// Client for the Google Gemini REST API.
///
/// The credential is injected at construction and only ever read.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    settings: GeminiSettings,
    image: ImageSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.settings.base_url)
            .field("model", &self.settings.model)
            .field("image_model", &self.image.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client from explicit settings.
    #[instrument(name = "gemini_client_new", skip_all, fields(model = %settings.model))]
    pub fn new(api_key: ApiKey, settings: GeminiSettings, image: ImageSettings) -> Self {
        debug!("Creating Gemini client");
        Self {
            http: reqwest::Client::new(),
            api_key,
            settings,
            image,
        }
    }

    /// Create a client from the loaded application configuration.
    pub fn from_config(api_key: ApiKey, config: &SkripConfig) -> Self {
        Self::new(api_key, config.gemini.clone(), config.image.clone())
    }

    /// Model used for scene images.
    pub fn image_model_name(&self) -> &str {
        &self.image.model
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/v1beta/models/{}:{}",
            self.settings.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    /// POST a JSON body and read the whole response as text.
    async fn post_json<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<RawResponse, reqwest::Error> {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    fn script_request(&self, prompt: &ScriptPrompt) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompt.instruction().clone())],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_p: self.settings.top_p,
                response_mime_type: "application/json".to_string(),
                response_schema: prompt.schema().clone(),
            },
        }
    }

    fn image_request(&self, prompt: &str, platform: PlatformFormat) -> PredictRequest {
        PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: self.image.aspect_ratio(platform).to_string(),
                output_options: OutputOptions {
                    mime_type: self.image.output_mime_type.clone(),
                },
            },
        }
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    #[instrument(
        name = "gemini_generate_scripts",
        skip(self, request),
        fields(
            model = %self.settings.model,
            platform = request.platform_format().id(),
            count = *request.count()
        )
    )]
    async fn generate_scripts(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Script>, GenerationError> {
        let prompt = ScriptPrompt::build(request);
        let body = self.script_request(&prompt);
        let url = self.endpoint(&self.settings.model, "generateContent");

        debug!("Requesting scripts");
        let (status, raw) = self.post_json(&url, &body).await.map_err(|e| {
            error!(error = %e, "Script request failed");
            GenerationError::new(GenerationErrorKind::Http(e.to_string()))
        })?;

        if !status.is_success() {
            let message = api_error_message(&raw);
            error!(status = status.as_u16(), message = %message, "Gemini rejected script request");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&raw).map_err(|e| {
            error!(error = %e, "Unexpected generateContent envelope");
            GenerationError::new(GenerationErrorKind::InvalidEnvelope(e.to_string()))
        })?;

        let text = envelope.text().ok_or_else(|| {
            let reason = envelope.missing_text_reason();
            error!(reason = %reason, "Gemini returned no script text");
            GenerationError::new(GenerationErrorKind::NoContent(reason))
        })?;

        let scripts = ScriptBatch::parse(&text).inspect_err(|e| {
            error!(error = %e, raw = %text, "Failed to parse model output");
        })?;

        info!(scripts = scripts.len(), "Generated scripts");
        Ok(scripts)
    }

    #[instrument(
        name = "gemini_generate_image",
        skip(self, prompt),
        fields(model = %self.image.model, prompt_len = prompt.len())
    )]
    async fn generate_image(
        &self,
        prompt: &str,
        platform: PlatformFormat,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        let body = self.image_request(prompt, platform);
        let url = self.endpoint(&self.image.model, "predict");

        debug!(aspect_ratio = %body.parameters.aspect_ratio, "Requesting scene image");
        let (status, raw) = self.post_json(&url, &body).await.map_err(|e| {
            error!(error = %e, "Image request failed");
            ImageGenerationError::new(ImageGenerationErrorKind::Http(e.to_string()))
        })?;

        if !status.is_success() {
            let message = api_error_message(&raw);
            error!(status = status.as_u16(), message = %message, "Gemini rejected image request");
            return Err(ImageGenerationError::new(ImageGenerationErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        let response: PredictResponse = serde_json::from_str(&raw).map_err(|e| {
            error!(error = %e, "Unexpected predict envelope");
            ImageGenerationError::new(ImageGenerationErrorKind::InvalidEnvelope(e.to_string()))
        })?;

        let prediction = response.predictions.into_iter().next();
        let Some((data, mime_type)) = prediction.as_ref().and_then(|p| {
            p.bytes_base64_encoded
                .as_ref()
                .map(|data| (data.clone(), p.mime_type.clone()))
        }) else {
            let reason = prediction.and_then(|p| p.rai_filtered_reason);
            error!(reason = ?reason, "Gemini returned no image");
            return Err(ImageGenerationError::new(ImageGenerationErrorKind::NoImage(
                reason,
            )));
        };

        STANDARD.decode(data.as_bytes()).map_err(|e| {
            error!(error = %e, "Image payload is not valid base64");
            ImageGenerationError::new(ImageGenerationErrorKind::InvalidImage(e.to_string()))
        })?;

        let mime_type = mime_type.unwrap_or_else(|| self.image.output_mime_type.clone());
        info!(mime_type = %mime_type, "Generated scene image");
        Ok(GeneratedImage::new(mime_type, data))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}
