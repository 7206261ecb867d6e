//! Mock content generator for testing.

#![allow(dead_code)]

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use skrip_core::{GeneratedImage, GenerationRequest, PlatformFormat, Scene, Script};
use skrip_error::{
    GenerationError, GenerationErrorKind, ImageGenerationError, ImageGenerationErrorKind,
};
use skrip_interface::ContentGenerator;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// One scripted answer to `generate_scripts`.
#[derive(Debug, Clone)]
pub enum MockScripts {
    /// Succeed with these scripts
    Success(Vec<Script>),
    /// Fail with this error
    Error(GenerationErrorKind),
}

/// Mock generator for testing.
///
/// Script answers are taken in order; the last one repeats once the list is
/// exhausted. Images encode their prompt and platform into the payload so
/// tests can tell them apart.
pub struct MockGenerator {
    script_answers: Vec<MockScripts>,
    image_error: Option<ImageGenerationErrorKind>,
    image_gate: Option<Arc<Semaphore>>,
    script_gate: Option<Arc<Semaphore>>,
    script_requests: Arc<Mutex<Vec<GenerationRequest>>>,
    image_requests: Arc<Mutex<Vec<(String, PlatformFormat)>>>,
}

impl MockGenerator {
    /// Always answer with these scripts.
    pub fn new_success(scripts: Vec<Script>) -> Self {
        Self::new_sequence(vec![MockScripts::Success(scripts)])
    }

    /// Always fail script generation.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new_sequence(vec![MockScripts::Error(error)])
    }

    /// Answer script requests from a sequence.
    pub fn new_sequence(answers: Vec<MockScripts>) -> Self {
        Self {
            script_answers: answers,
            image_error: None,
            image_gate: None,
            script_gate: None,
            script_requests: Arc::new(Mutex::new(Vec::new())),
            image_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every image request with this error.
    pub fn with_image_error(mut self, error: ImageGenerationErrorKind) -> Self {
        self.image_error = Some(error);
        self
    }

    /// Hold every image request until a permit is added to the returned gate.
    pub fn with_image_gate(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.image_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Hold every script request until a permit is added to the returned gate.
    pub fn with_script_gate(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.script_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Number of script requests received.
    pub fn script_calls(&self) -> usize {
        self.script_requests.lock().unwrap().len()
    }

    /// Script requests received, in order.
    pub fn script_requests(&self) -> Vec<GenerationRequest> {
        self.script_requests.lock().unwrap().clone()
    }

    /// Image requests received, in order.
    pub fn image_requests(&self) -> Vec<(String, PlatformFormat)> {
        self.image_requests.lock().unwrap().clone()
    }

    /// Payload the mock returns for a prompt.
    pub fn image_payload(prompt: &str, platform: PlatformFormat) -> String {
        STANDARD.encode(format!("{}|{}", platform.id(), prompt))
    }
}

#[async_trait]
impl ContentGenerator for MockGenerator {
    async fn generate_scripts(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Script>, GenerationError> {
        let index = {
            let mut requests = self.script_requests.lock().unwrap();
            requests.push(*request);
            requests.len() - 1
        };

        if let Some(gate) = &self.script_gate {
            gate.acquire().await.unwrap().forget();
        }

        let answer = self
            .script_answers
            .get(index)
            .or_else(|| self.script_answers.last())
            .cloned()
            .unwrap_or(MockScripts::Success(Vec::new()));
        match answer {
            MockScripts::Success(scripts) => Ok(scripts),
            MockScripts::Error(kind) => Err(GenerationError::new(kind)),
        }
    }

    async fn generate_image(
        &self,
        prompt: &str,
        platform: PlatformFormat,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        self.image_requests
            .lock()
            .unwrap()
            .push((prompt.to_string(), platform));

        if let Some(gate) = &self.image_gate {
            gate.acquire().await.unwrap().forget();
        }

        match &self.image_error {
            Some(kind) => Err(ImageGenerationError::new(kind.clone())),
            None => Ok(GeneratedImage::new(
                "image/png",
                Self::image_payload(prompt, platform),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-generator"
    }
}

/// A script with `scene_count` filled-in scenes.
pub fn script(title: &str, scene_count: usize) -> Script {
    Script {
        title: title.to_string(),
        duration: "30 detik".to_string(),
        character_description: "Narator stickman".to_string(),
        scenes: (1..=scene_count)
            .map(|n| Scene {
                name: format!("Scene {n}"),
                visual_prompt: format!("stickman {title} adegan {n}"),
                audio_description: format!("VO: bagian {n}\nSFX: klik"),
            })
            .collect(),
        hashtags: format!("#{} #tips", title.to_lowercase().replace(' ', "")),
    }
}

/// `count` scripts titled "Ide 1", "Ide 2", ... with `scene_count` scenes each.
pub fn scripts(count: usize, scene_count: usize) -> Vec<Script> {
    (1..=count)
        .map(|n| script(&format!("Ide {n}"), scene_count))
        .collect()
}
