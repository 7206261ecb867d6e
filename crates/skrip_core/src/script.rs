//! Script and scene records parsed from the model's answer.

use serde::{Deserialize, Serialize};
use skrip_error::{GenerationError, GenerationErrorKind};
use std::fmt::Write as _;

/// One scene of a script. Scene order within a script is temporal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scene {
    /// Scene title, e.g. "Pembuka"
    #[serde(rename = "namaScene")]
    pub name: String,
    /// Image-generation prompt in the stick-figure style
    #[serde(rename = "visual")]
    pub visual_prompt: String,
    /// Dialogue, voice over, music and sound effects
    #[serde(rename = "audio")]
    pub audio_description: String,
}

/// One video-script idea.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    /// Catchy video title
    #[serde(rename = "judulKonten")]
    pub title: String,
    /// Free-text duration estimate
    #[serde(rename = "durasi")]
    pub duration: String,
    /// Who speaks or appears in the video
    #[serde(rename = "deskripsiKarakter")]
    pub character_description: String,
    /// Ordered scenes
    pub scenes: Vec<Scene>,
    /// Space-separated hashtags
    pub hashtags: String,
}

impl Script {
    /// Check the invariants the schema only suggests to the backend.
    ///
    /// A script needs at least one scene and every scene needs all three
    /// fields filled in. Violations are [`GenerationErrorKind::InvalidScript`].
    pub fn validate(&self) -> Result<(), GenerationErrorKind> {
        if self.scenes.is_empty() {
            return Err(GenerationErrorKind::InvalidScript(format!(
                "script '{}' has no scenes",
                self.title
            )));
        }
        for (index, scene) in self.scenes.iter().enumerate() {
            let missing = [
                ("namaScene", &scene.name),
                ("visual", &scene.visual_prompt),
                ("audio", &scene.audio_description),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());
            if let Some((field, _)) = missing {
                return Err(GenerationErrorKind::InvalidScript(format!(
                    "script '{}' scene {} has an empty '{}'",
                    self.title,
                    index + 1,
                    field
                )));
            }
        }
        Ok(())
    }

    /// Plain-text rendering used by the copy action.
    ///
    /// `number` is the 1-based position shown to the user.
    pub fn to_clipboard_text(&self, number: usize) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "#{} {}", number, self.title);
        let _ = writeln!(text, "Durasi: {}", self.duration);
        let _ = writeln!(text, "Karakter: {}", self.character_description);
        for scene in &self.scenes {
            let _ = writeln!(text);
            let _ = writeln!(text, "[{}]", scene.name);
            let _ = writeln!(text, "PROMPT GAMBAR: {}", scene.visual_prompt);
            let _ = writeln!(text, "AUDIO:");
            for line in scene.audio_description.lines() {
                let _ = writeln!(text, "{}", line.trim());
            }
        }
        let _ = writeln!(text);
        let _ = write!(text, "Hashtags: {}", self.hashtags);
        text
    }
}

/// Top-level object of the structured answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBatch {
    /// Generated scripts; absent or null means none
    #[serde(default)]
    pub scripts: Option<Vec<Script>>,
}

impl ScriptBatch {
    /// Parse and validate the model's structured answer.
    ///
    /// A missing `scripts` field yields an empty list. Anything that is not
    /// JSON of the declared shape, or a script that breaks its invariants,
    /// is a parse failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use skrip_core::ScriptBatch;
    ///
    /// assert!(ScriptBatch::parse(r#"{"scripts": []}"#).unwrap().is_empty());
    /// assert!(ScriptBatch::parse("{}").unwrap().is_empty());
    /// assert!(ScriptBatch::parse("not json").unwrap_err().is_parse_failure());
    /// ```
    #[track_caller]
    pub fn parse(text: &str) -> Result<Vec<Script>, GenerationError> {
        let batch: ScriptBatch = serde_json::from_str(text.trim())
            .map_err(|e| GenerationError::new(GenerationErrorKind::Parse(e.to_string())))?;
        let scripts = batch.scripts.unwrap_or_default();
        for script in &scripts {
            script.validate().map_err(GenerationError::new)?;
        }
        Ok(scripts)
    }
}
