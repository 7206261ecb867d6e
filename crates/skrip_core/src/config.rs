//! Layered configuration and the backend credential.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`skrip.toml` shipped with the crate)
//! 2. `~/.config/skrip/skrip.toml`
//! 3. `./skrip.toml`
//! 4. An explicit file passed by the caller
//! 5. Environment variables such as `SKRIP__SERVER__PORT`
//!
//! The API key is deliberately not part of any file; see [`ApiKey`].

use crate::PlatformFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use skrip_error::{ConfigError, ConfigErrorKind};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../skrip.toml");

/// Environment variables consulted for the credential, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Text-generation backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// API root, without trailing slash
    pub base_url: String,
    /// Model used for script generation
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus-sampling threshold
    pub top_p: f32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 1.0,
            top_p: 0.95,
        }
    }
}

/// Scene image settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSettings {
    /// Model used for scene images
    pub model: String,
    /// Aspect ratio for short-form scenes
    pub short_aspect_ratio: String,
    /// Aspect ratio for long-form scenes
    pub long_aspect_ratio: String,
    /// Requested output encoding
    pub output_mime_type: String,
}

impl ImageSettings {
    /// Aspect ratio hint for the given platform.
    pub fn aspect_ratio(&self, platform: PlatformFormat) -> &str {
        match platform {
            PlatformFormat::Short => &self.short_aspect_ratio,
            PlatformFormat::Long => &self.long_aspect_ratio,
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            model: "imagen-3.0-generate-002".to_string(),
            short_aspect_ratio: "9:16".to_string(),
            long_aspect_ratio: "16:9".to_string(),
            output_mime_type: "image/png".to_string(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` for the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkripConfig {
    /// Script generation backend
    pub gemini: GeminiSettings,
    /// Scene image backend
    pub image: ImageSettings,
    /// HTTP listener
    pub server: ServerSettings,
}

impl SkripConfig {
    /// Bundled defaults only.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::build(Self::defaults())
    }

    /// Bundled defaults overridden by a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading configuration from file");
        Self::build(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// Load every source with the documented precedence.
    ///
    /// User files are optional and skipped when absent; `explicit`, when
    /// given, must exist.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/skrip/skrip.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("skrip").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SKRIP")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Build(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Deserialize(e.to_string())))
    }
}

/// The single process-wide backend credential.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank values.
    #[track_caller]
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::BlankApiKey));
        }
        Ok(Self(key.trim().to_string()))
    }

    /// Read the key from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when none of [`API_KEY_VARS`] holds a non-blank value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map(Self::new)
            .unwrap_or_else(|| {
                Err(ConfigError::new(ConfigErrorKind::MissingApiKey {
                    variables: API_KEY_VARS.join(", "),
                }))
            })
    }

    /// The secret, for building request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
