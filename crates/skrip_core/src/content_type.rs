//! Content types.

use serde::{Deserialize, Serialize};

/// Kind of video the ideas should be.
///
/// # Examples
///
/// ```
/// use skrip_core::ContentType;
///
/// assert_eq!(ContentType::MythVsFact.id(), "myth_vs_fact");
/// assert_eq!(ContentType::MythVsFact.to_string(), "Mitos vs Fakta");
/// ```
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
pub enum ContentType {
    /// Practical tips and tricks
    #[default]
    #[display("Tips & Trik")]
    Tips,
    /// In-depth explanation of one topic
    #[display("Edukasi Mendalam")]
    DeepEducation,
    /// Inspirational story
    #[display("Cerita Inspiratif")]
    InspirationalStory,
    /// Review of a product, book or tool
    #[display("Review")]
    Review,
    /// Debunking common myths
    #[display("Mitos vs Fakta")]
    MythVsFact,
}

impl ContentType {
    /// Stable identifier used on the wire.
    pub fn id(self) -> &'static str {
        self.into()
    }
}
