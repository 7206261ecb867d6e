//! Command-line interface.

use clap::Parser;
use skrip_core::SkripConfig;
use std::path::PathBuf;

/// Skrip - serve the AI content-idea studio in the browser
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "skrip")]
#[command(about = "Serve the AI content-idea studio in the browser", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Extra configuration file, applied over the defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `server.port`
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Apply `--host` and `--port` on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut SkripConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
