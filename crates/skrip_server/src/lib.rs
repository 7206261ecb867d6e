//! Browser studio for Skrip.
//!
//! The server owns one [`Studio`]: the current script list plus a per-scene
//! image slot map. Handlers in [`create_router`] drive it through a
//! [`StudioService`], which talks to any [`skrip_interface::ContentGenerator`].
//!
//! Script generation is awaited by the request that started it. Scene images
//! run as detached tasks; the page polls `/api/state` to see them land.
//! Results that arrive after the user started a newer generation, or after
//! the same scene was requested again, are dropped.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod service;
mod state;

pub use api::{ApiError, create_router};
pub use service::StudioService;
pub use state::{
    GenerationTicket, ImageTicket, SceneImageState, SceneImageView, SceneKey, ScriptListPhase,
    Studio, StudioSnapshot, StudioStatus,
};
