//! HTTP API and the embedded browser page.

use crate::service::StudioService;
use crate::state::{SceneKey, StudioSnapshot};
use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use skrip_core::{
    Category, ContentType, GenerationRequest, MAX_SCRIPT_COUNT, MIN_SCRIPT_COUNT, PlatformFormat,
};
use skrip_error::StudioError;
use strum::IntoEnumIterator;
use tracing::{debug, error, warn};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Error answer of the API: a status code and a `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Build an error response.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message placed in the body.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StudioError> for ApiError {
    fn from(err: StudioError) -> Self {
        Self::new(StatusCode::NOT_FOUND, err.kind.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// One selectable value: stable identifier plus display label.
#[derive(Debug, Clone, Serialize)]
struct OptionEntry {
    id: &'static str,
    label: String,
}

/// Everything the selection controls offer.
#[derive(Debug, Clone, Serialize)]
struct OptionsResponse {
    categories: Vec<OptionEntry>,
    content_types: Vec<OptionEntry>,
    platform_formats: Vec<OptionEntry>,
    counts: Vec<u32>,
    defaults: GenerationRequest,
}

impl OptionsResponse {
    fn build() -> Self {
        Self {
            categories: Category::iter()
                .map(|c| OptionEntry {
                    id: c.id(),
                    label: c.to_string(),
                })
                .collect(),
            content_types: ContentType::iter()
                .map(|c| OptionEntry {
                    id: c.id(),
                    label: c.to_string(),
                })
                .collect(),
            platform_formats: PlatformFormat::iter()
                .map(|p| OptionEntry {
                    id: p.id(),
                    label: p.to_string(),
                })
                .collect(),
            counts: (MIN_SCRIPT_COUNT..=MAX_SCRIPT_COUNT).collect(),
            defaults: GenerationRequest::default(),
        }
    }
}

/// Creates the studio router.
pub fn create_router(service: StudioService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/options", get(options))
        .route("/api/state", get(state))
        .route("/api/scripts", post(generate_scripts))
        .route("/api/scripts/:script/text", get(script_text))
        .route(
            "/api/scripts/:script/scenes/:scene/image",
            post(request_image).get(download_image),
        )
        .with_state(service)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse::build())
}

async fn state(State(service): State<StudioService>) -> Json<StudioSnapshot> {
    Json(service.snapshot())
}

async fn generate_scripts(
    State(service): State<StudioService>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<StudioSnapshot>, ApiError> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected generation request");
    })?;
    debug!(?request, "Generation requested");
    Ok(Json(service.generate_scripts(request).await))
}

async fn request_image(
    State(service): State<StudioService>,
    Path((script, scene)): Path<(usize, usize)>,
) -> Result<impl IntoResponse, ApiError> {
    let key = SceneKey::new(script, scene);
    let _detached = service.request_image(key)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "script": script, "scene": scene, "pending": true })),
    ))
}

async fn download_image(
    State(service): State<StudioService>,
    Path((script, scene)): Path<(usize, usize)>,
) -> Result<impl IntoResponse, ApiError> {
    let image = service.image_download(SceneKey::new(script, scene))?;
    let bytes = image.decode().map_err(|e| {
        error!(error = %e, script, scene, "Stored image does not decode");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Image data is corrupt")
    })?;
    let filename = format!(
        "skrip-{}-scene-{}.{}",
        script + 1,
        scene + 1,
        image.file_extension()
    );
    Ok((
        [
            (header::CONTENT_TYPE, image.mime_type().clone()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

async fn script_text(
    State(service): State<StudioService>,
    Path(script): Path<usize>,
) -> Result<impl IntoResponse, ApiError> {
    let text = service.script_text(script)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
