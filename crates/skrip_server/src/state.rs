//! Studio state: the script list and the per-scene image slots.
//!
//! All mutation goes through ticket pairs. `begin_*` records that a backend
//! call is starting and hands back a ticket; `complete_*` applies the result
//! only if the ticket is still the newest one for what it addresses.
//!
//! - A [`GenerationTicket`] is current while no later generation has begun.
//! - An [`ImageTicket`] is current while its generation epoch is current and
//!   no later request for the same [`SceneKey`] has begun.
//!
//! Stale completions are logged and dropped, so outstanding image calls from
//! an earlier list can never land on the new one.

use serde::{Deserialize, Serialize};
use skrip_core::{GeneratedImage, GenerationRequest, PlatformFormat, Scene, Script};
use skrip_error::{
    EMPTY_RESULT_MESSAGE, GenerationError, ImageGenerationError, StudioError, StudioErrorKind,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Address of one scene: script index, then scene index within the script.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SceneKey {
    /// Index into the current script list
    pub script: usize,
    /// Index into that script's scenes
    pub scene: usize,
}

impl SceneKey {
    /// Build a key.
    pub fn new(script: usize, scene: usize) -> Self {
        Self { script, scene }
    }
}

impl std::fmt::Display for SceneKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.script, self.scene)
    }
}

/// Image state of one scene.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct SceneImageState {
    /// A request for this scene is in flight
    pending: bool,
    /// User-facing failure message of the last request
    error_message: Option<String>,
    /// Image from the last successful request
    image: Option<GeneratedImage>,
}

impl SceneImageState {
    fn new_pending() -> Self {
        Self {
            pending: true,
            ..Self::default()
        }
    }

    /// True once an image is available.
    pub fn is_ready(&self) -> bool {
        !self.pending && self.image.is_some()
    }
}

#[derive(Debug, Clone)]
struct SceneImageSlot {
    serial: u64,
    state: SceneImageState,
}

/// Lifecycle of the script list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScriptListPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A generation call is in flight
    Requesting,
    /// The last generation produced scripts
    Ready(Vec<Script>),
    /// The last generation succeeded with zero scripts
    Empty,
    /// The last generation failed; carries the user-facing message
    Failed(String),
}

/// Proof that a generation started at a given epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

/// Proof that an image request started, plus what the call needs.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ImageTicket {
    /// Generation epoch the scene belongs to
    epoch: u64,
    /// Scene the request is for
    key: SceneKey,
    /// Per-request serial, unique within a studio
    serial: u64,
    /// Visual prompt of the scene, sent as-is
    prompt: String,
    /// Platform of the generation, selects the aspect ratio
    platform: PlatformFormat,
}

/// Coarse status of the script list, as shown to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StudioStatus {
    /// Nothing requested yet
    Idle,
    /// Generation in flight
    Requesting,
    /// Scripts available
    Ready,
    /// Generation returned no scripts
    Empty,
    /// Generation failed
    Failed,
}

/// Serializable view of one image slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneImageView {
    /// Script index
    pub script: usize,
    /// Scene index
    pub scene: usize,
    /// Request in flight
    pub pending: bool,
    /// Failure message, if the last request failed
    pub error_message: Option<String>,
    /// `data:` URI of the image, if ready
    pub image_data_uri: Option<String>,
}

/// Everything the browser needs to render the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudioSnapshot {
    /// Increments on every generation
    pub epoch: u64,
    /// Script list status
    pub status: StudioStatus,
    /// Message for `empty` and `failed`
    pub message: Option<String>,
    /// Selections of the last generation
    pub request: Option<GenerationRequest>,
    /// Current scripts, in backend order
    pub scripts: Vec<Script>,
    /// Image slots that exist, ordered by key
    pub images: Vec<SceneImageView>,
}

/// The studio: one script list and its scene images.
#[derive(Debug, Default)]
pub struct Studio {
    epoch: u64,
    next_serial: u64,
    phase: ScriptListPhase,
    request: Option<GenerationRequest>,
    images: HashMap<SceneKey, SceneImageSlot>,
}

impl Studio {
    /// Empty studio in the `Idle` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current script list phase.
    pub fn phase(&self) -> &ScriptListPhase {
        &self.phase
    }

    /// Selections of the last generation, if any.
    pub fn request(&self) -> Option<&GenerationRequest> {
        self.request.as_ref()
    }

    /// Current scripts; empty unless the phase is `Ready`.
    pub fn scripts(&self) -> &[Script] {
        match &self.phase {
            ScriptListPhase::Ready(scripts) => scripts,
            _ => &[],
        }
    }

    /// Script at `index` in the current list.
    pub fn script(&self, index: usize) -> Result<&Script, StudioError> {
        self.scripts()
            .get(index)
            .ok_or_else(|| StudioError::new(StudioErrorKind::UnknownScript(index)))
    }

    /// Scene addressed by `key` in the current list.
    pub fn scene(&self, key: SceneKey) -> Result<&Scene, StudioError> {
        self.script(key.script)?.scenes.get(key.scene).ok_or_else(|| {
            StudioError::new(StudioErrorKind::UnknownScene {
                script: key.script,
                scene: key.scene,
            })
        })
    }

    /// Image state of a scene, if one was ever requested.
    pub fn image(&self, key: SceneKey) -> Option<&SceneImageState> {
        self.images.get(&key).map(|slot| &slot.state)
    }

    /// Finished image of a scene.
    pub fn ready_image(&self, key: SceneKey) -> Result<&GeneratedImage, StudioError> {
        self.scene(key)?;
        self.image(key)
            .filter(|state| state.is_ready())
            .and_then(|state| state.image.as_ref())
            .ok_or_else(|| {
                StudioError::new(StudioErrorKind::ImageNotReady {
                    script: key.script,
                    scene: key.scene,
                })
            })
    }

    /// Start a generation: clears scripts, message and every image slot.
    pub fn begin_generation(&mut self, request: GenerationRequest) -> GenerationTicket {
        self.epoch += 1;
        self.phase = ScriptListPhase::Requesting;
        self.request = Some(request);
        self.images.clear();
        debug!(epoch = self.epoch, "Generation started");
        GenerationTicket { epoch: self.epoch }
    }

    /// Apply a generation result. Returns `false` if the ticket was stale.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<Script>, GenerationError>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            warn!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "Discarding superseded generation result"
            );
            return false;
        }
        self.phase = match result {
            Ok(scripts) if scripts.is_empty() => ScriptListPhase::Empty,
            Ok(scripts) => ScriptListPhase::Ready(scripts),
            Err(e) => ScriptListPhase::Failed(e.user_message().to_string()),
        };
        true
    }

    /// Start an image request for an existing scene.
    ///
    /// Overwrites any earlier slot for the key with a pending one. Other keys
    /// are left alone.
    pub fn begin_image(&mut self, key: SceneKey) -> Result<ImageTicket, StudioError> {
        let prompt = self.scene(key)?.visual_prompt.clone();
        let platform = self
            .request
            .map(|request| *request.platform_format())
            .unwrap_or_default();

        self.next_serial += 1;
        let serial = self.next_serial;
        self.images.insert(
            key,
            SceneImageSlot {
                serial,
                state: SceneImageState::new_pending(),
            },
        );
        debug!(%key, serial, "Image request started");

        Ok(ImageTicket {
            epoch: self.epoch,
            key,
            serial,
            prompt,
            platform,
        })
    }

    /// Apply an image result. Returns `false` if the ticket was stale.
    pub fn complete_image(
        &mut self,
        ticket: ImageTicket,
        result: Result<GeneratedImage, ImageGenerationError>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            warn!(key = %ticket.key, "Discarding image for a previous script list");
            return false;
        }
        let Some(slot) = self
            .images
            .get_mut(&ticket.key)
            .filter(|slot| slot.serial == ticket.serial)
        else {
            warn!(key = %ticket.key, serial = ticket.serial, "Discarding superseded image");
            return false;
        };
        slot.state = match result {
            Ok(image) => SceneImageState {
                pending: false,
                error_message: None,
                image: Some(image),
            },
            Err(e) => SceneImageState {
                pending: false,
                error_message: Some(e.user_message()),
                image: None,
            },
        };
        true
    }

    /// Serializable copy of the whole state.
    pub fn snapshot(&self) -> StudioSnapshot {
        let (status, message) = match &self.phase {
            ScriptListPhase::Idle => (StudioStatus::Idle, None),
            ScriptListPhase::Requesting => (StudioStatus::Requesting, None),
            ScriptListPhase::Ready(_) => (StudioStatus::Ready, None),
            ScriptListPhase::Empty => (StudioStatus::Empty, Some(EMPTY_RESULT_MESSAGE.to_string())),
            ScriptListPhase::Failed(message) => (StudioStatus::Failed, Some(message.clone())),
        };

        let mut images: Vec<SceneImageView> = self
            .images
            .iter()
            .map(|(key, slot)| SceneImageView {
                script: key.script,
                scene: key.scene,
                pending: slot.state.pending,
                error_message: slot.state.error_message.clone(),
                image_data_uri: slot.state.image.as_ref().map(GeneratedImage::data_uri),
            })
            .collect();
        images.sort_by_key(|view| (view.script, view.scene));

        StudioSnapshot {
            epoch: self.epoch,
            status,
            message,
            request: self.request,
            scripts: self.scripts().to_vec(),
            images,
        }
    }
}
