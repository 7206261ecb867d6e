//! Content categories.

use serde::{Deserialize, Serialize};

/// Main topic of the requested ideas.
///
/// `Display` yields the label shown to the user; the serde and `FromStr`
/// form is the stable snake_case identifier.
///
/// # Examples
///
/// ```
/// use skrip_core::Category;
///
/// let category: Category = "productivity".parse().unwrap();
/// assert_eq!(category.to_string(), "Produktifitas");
/// assert_eq!(category.id(), "productivity");
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
pub enum Category {
    /// Educational content
    #[default]
    #[display("Edukasi")]
    Education,
    /// Productivity content
    #[display("Produktifitas")]
    Productivity,
    /// Everything else
    #[display("Umum")]
    General,
}

impl Category {
    /// Stable identifier used on the wire.
    pub fn id(self) -> &'static str {
        self.into()
    }
}
