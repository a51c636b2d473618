//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::layout::{Breakpoint, BreakpointError};
use crate::scene::LinkTemplates;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notes: NotesConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the build step's output lives
#[derive(Debug, Clone, Deserialize)]
pub struct NotesConfig {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("./notes/notes.json")
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
        }
    }
}

/// Repository links ("Source", "Edit this page", "Add a new note")
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_repository")]
    pub repository: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,
}

fn default_repository() -> String {
    LinkTemplates::default().repository
}

fn default_branch() -> String {
    LinkTemplates::default().branch
}

fn default_notes_dir() -> String {
    LinkTemplates::default().notes_dir
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            branch: default_branch(),
            notes_dir: default_notes_dir(),
        }
    }
}

impl LinksConfig {
    pub fn templates(&self) -> LinkTemplates {
        LinkTemplates::new(&self.repository, &self.branch, &self.notes_dir)
    }
}

/// Responsive layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Viewports at or above this breakpoint get the static sidebar
    #[serde(default = "default_static_breakpoint")]
    pub static_breakpoint: Breakpoint,

    /// Width assumed when the client sends no viewport hint
    #[serde(default = "default_viewport_width")]
    pub default_viewport_width: u32,
}

fn default_static_breakpoint() -> Breakpoint {
    Breakpoint::Sm
}

fn default_viewport_width() -> u32 {
    1024
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            static_breakpoint: default_static_breakpoint(),
            default_viewport_width: default_viewport_width(),
        }
    }
}

/// Site presentation
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
}

fn default_site_title() -> String {
    "Garden".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed browser origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// A config file that exists but does not parse is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("garden").join("config.toml")),
            Some(PathBuf::from("/etc/garden/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `GARDEN_*` environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        get: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        // Notes overrides
        if let Some(manifest) = get("GARDEN_MANIFEST") {
            self.notes.manifest = PathBuf::from(manifest);
        }

        // Link overrides
        if let Some(repository) = get("GARDEN_REPOSITORY") {
            self.links.repository = repository;
        }
        if let Some(branch) = get("GARDEN_BRANCH") {
            self.links.branch = branch;
        }

        // Layout overrides
        if let Some(name) = get("GARDEN_STATIC_BREAKPOINT") {
            self.layout.static_breakpoint = name.parse()?;
        }

        // API overrides
        if let Some(host) = get("GARDEN_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = get("GARDEN_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = get("GARDEN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = get("GARDEN_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid layout configuration: {0}")]
    Breakpoint(#[from] BreakpointError),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Garden Configuration
#
# Environment variables override these settings:
# - GARDEN_MANIFEST
# - GARDEN_REPOSITORY
# - GARDEN_BRANCH
# - GARDEN_STATIC_BREAKPOINT
# - GARDEN_API_HOST
# - GARDEN_API_PORT
# - GARDEN_LOG_LEVEL
# - GARDEN_LOG_FORMAT

[notes]
# Manifest written by the markdown build step
manifest = "./notes/notes.json"

[links]
# Repository hosting the note sources
repository = "https://github.com/jacobparis/garden"

# Branch used by "Edit this page" links
branch = "master"

# Directory of note sources inside the repository
notes_dir = "app/notes"

[layout]
# Breakpoint at which the sidebar becomes static: sm, md, lg, xl, 2xl
static_breakpoint = "sm"

# Viewport width assumed when the browser sends no hint (px)
default_viewport_width = 1024

[site]
# Site name shown in page titles
title = "Garden"

[api]
# Server host
host = "0.0.0.0"

# Server port
port = 8090

# Allowed CORS origins; empty allows any origin (the UI dev server
# runs on its own port). Example: ["http://localhost:8091"]
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
