//! Platform formats.

use serde::{Deserialize, Serialize};

/// Target platform format; drives the structural guidance in the prompt and
/// the aspect ratio of scene images.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PlatformFormat {
    /// Vertical short-form video (TikTok, Reels)
    #[default]
    #[display("Video Pendek (TikTok, Reels)")]
    Short,
    /// Long-form video (YouTube)
    #[display("Video Panjang (YouTube)")]
    Long,
}

impl PlatformFormat {
    /// Stable identifier used on the wire.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Target running time, as phrased to the model.
    pub fn target_duration(self) -> &'static str {
        match self {
            PlatformFormat::Short => "15-60 detik",
            PlatformFormat::Long => "5-10 menit",
        }
    }
}
