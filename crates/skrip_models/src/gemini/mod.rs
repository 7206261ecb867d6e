//! Google Gemini REST client.
//!
//! - `generateContent` with a `responseSchema` for script ideas
//! - `predict` on an Imagen model for scene illustrations

mod client;
mod dto;

pub use client::GeminiClient;
