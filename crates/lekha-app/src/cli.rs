//! CLI argument definitions for the lekha driver binary.
//!
//! Uses `clap` with derive macros. Priority resolution:
//! CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Lekha — terminal driver for the embeddable assistant widget.
#[derive(Parser, Debug)]
#[command(name = "lekha", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Base URL of the knowledge-retrieval service.
    #[arg(long = "api-base")]
    pub api_base: Option<String>,

    /// Disable web search for this run.
    #[arg(long = "no-web-search")]
    pub no_web_search: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Write the embeddable widget markup to this file on exit.
    #[arg(long = "export-html")]
    pub export_html: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > LEKHA_CONFIG env var > platform default
    /// (~/.lekha/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("LEKHA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".lekha").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".lekha").join("config.toml");
    }
    PathBuf::from("config.toml")
}
