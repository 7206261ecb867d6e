//! Drives the studio with a content generator.

use crate::state::{SceneImageState, SceneKey, Studio, StudioSnapshot};
use parking_lot::Mutex;
use skrip_core::{GeneratedImage, GenerationRequest};
use skrip_error::StudioError;
use skrip_interface::ContentGenerator;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, error, info, info_span, instrument};

/// Shared handle to the studio and the generator behind it.
///
/// Cloning is cheap; every clone sees the same studio. The studio lock is
/// only taken for bookkeeping and never across a backend call.
#[derive(Clone)]
pub struct StudioService {
    generator: Arc<dyn ContentGenerator>,
    studio: Arc<Mutex<Studio>>,
}

impl std::fmt::Debug for StudioService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioService")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_name())
            .finish_non_exhaustive()
    }
}

impl StudioService {
    /// Wrap a generator with a fresh, idle studio.
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            generator,
            studio: Arc::new(Mutex::new(Studio::new())),
        }
    }

    /// Generate a new script list and wait for it.
    ///
    /// The previous list and all its image slots are cleared before the
    /// backend is called. If another generation starts meanwhile, this
    /// result is dropped and the returned snapshot shows the newer state.
    ///
    /// The backend call runs on its own task, so the studio still settles
    /// when the caller stops waiting.
    #[instrument(
        skip(self, request),
        fields(
            provider = self.generator.provider_name(),
            category = request.category().id(),
            content_type = request.content_type().id(),
            platform = request.platform_format().id(),
            count = *request.count()
        )
    )]
    pub async fn generate_scripts(&self, request: GenerationRequest) -> StudioSnapshot {
        let ticket = self.studio.lock().begin_generation(request);

        let generator = Arc::clone(&self.generator);
        let studio = Arc::clone(&self.studio);
        let task = async move {
            let result = generator.generate_scripts(&request).await;
            studio.lock().complete_generation(ticket, result);
        };
        if let Err(e) = tokio::spawn(task.in_current_span()).await {
            error!(error = %e, "Generation task did not finish");
        }

        let snapshot = self.snapshot();
        info!(
            status = <&'static str>::from(snapshot.status),
            scripts = snapshot.scripts.len(),
            "Generation finished"
        );
        snapshot
    }

    /// Start an image request for a scene and return at once.
    ///
    /// The slot turns pending immediately; the backend call runs on its own
    /// task. The handle is only useful to callers that want to wait for it.
    #[instrument(skip(self), fields(key = %key))]
    pub fn request_image(&self, key: SceneKey) -> Result<JoinHandle<()>, StudioError> {
        let ticket = self.studio.lock().begin_image(key)?;
        debug!(serial = *ticket.serial(), "Spawning image task");

        let generator = Arc::clone(&self.generator);
        let studio = Arc::clone(&self.studio);
        let span = info_span!("scene_image", key = %key, serial = *ticket.serial());
        let task = async move {
            let result = generator
                .generate_image(ticket.prompt(), *ticket.platform())
                .await;
            let succeeded = result.is_ok();
            if studio.lock().complete_image(ticket, result) {
                info!(succeeded, "Scene image finished");
            }
        };
        Ok(tokio::spawn(task.instrument(span)))
    }

    /// Current state of the whole studio.
    pub fn snapshot(&self) -> StudioSnapshot {
        self.studio.lock().snapshot()
    }

    /// Image state of one scene, if it was ever requested.
    pub fn image_state(&self, key: SceneKey) -> Option<SceneImageState> {
        self.studio.lock().image(key).cloned()
    }

    /// Plain-text export of a script, numbered from one.
    pub fn script_text(&self, index: usize) -> Result<String, StudioError> {
        let studio = self.studio.lock();
        Ok(studio.script(index)?.to_clipboard_text(index + 1))
    }

    /// Finished image of a scene, for download.
    pub fn image_download(&self, key: SceneKey) -> Result<GeneratedImage, StudioError> {
        self.studio.lock().ready_image(key).cloned()
    }
}
