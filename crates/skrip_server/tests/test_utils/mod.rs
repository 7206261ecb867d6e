//! Test utilities for Skrip server tests.
//!
//! This module provides a mock generator and script fixtures.

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockGenerator, MockScripts, script, scripts};
