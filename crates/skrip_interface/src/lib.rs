//! Trait definitions for the Skrip generation backends.
//!
//! The server only talks to a [`ContentGenerator`], so a fake backend can be
//! injected wherever the real Gemini client would go.

mod traits;

pub use traits::ContentGenerator;
