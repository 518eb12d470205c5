//! Server configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ServerError};

/// Main configuration structure for the VideoDigest server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Listener and asset settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used in log output.
    #[serde(default = "default_title")]
    pub title: String,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Listener and asset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built site.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,

    /// Page served for any path without a file, so client routes work on reload.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

// Default value functions
fn default_title() -> String {
    "VideoDigest".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            site_root: default_site_root(),
            index_file: default_index_file(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:3000".
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the fallback page.
    pub fn index_path(&self) -> PathBuf {
        self.site_root.join(&self.index_file)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ServerError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ServerError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `VIDEODIGEST__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("VIDEODIGEST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(ServerError::config("site.title cannot be empty"));
        }

        if self.server.port == 0 {
            return Err(ServerError::config("server.port cannot be 0"));
        }

        if self.server.index_file.is_empty() {
            return Err(ServerError::config("server.index_file cannot be empty"));
        }

        if self.server.host != "127.0.0.1" && self.server.host != "localhost" {
            tracing::warn!(host = %self.server.host, "server is reachable beyond localhost");
        }

        Ok(())
    }
}
