//! Configuration loading for labsite.
//! Reads labsite.toml from the current directory or the path in LABSITE_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use labsite_common::error::{LabsiteError, Result};
use labsite_common::{Catalog, SiteProfile};

pub const DEFAULT_CONFIG_PATH: &str = "labsite.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteProfile,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// YAML or JSON catalog replacing the built-in demo content
    pub path: Option<PathBuf>,
    /// Directory whose templates override the embedded ones by name
    pub templates_dir: Option<PathBuf>,
    /// Files served at the site root and copied into exports (images etc.)
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Prefix for every site-relative URL, e.g. "/prof-lab" on GitHub Pages
    #[serde(default)]
    pub base_path: String,
    #[serde(default = "bool_true")]
    pub trailing_slash: bool,
}

fn default_out_dir() -> PathBuf { PathBuf::from("out") }
fn bool_true()       -> bool    { true }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            base_path: String::new(),
            trailing_slash: true,
        }
    }
}

mod tests;

impl Config {
    /// Load configuration.
    /// An explicit path (or LABSITE_CONFIG) must exist; a missing
    /// labsite.toml in the current directory falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var("LABSITE_CONFIG").ok().map(PathBuf::from);
        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_path(&path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_path(DEFAULT_CONFIG_PATH)?,
            None => {
                tracing::info!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LabsiteError::Config(format!(
                "Config file not found: {}\nCopy labsite.example.toml to labsite.toml and edit it.",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| LabsiteError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LabsiteError::Config(e.to_string()))
    }

    /// Apply LABSITE_BIND and LABSITE_BASE_PATH style overrides.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = lookup("LABSITE_BIND") {
            self.server.bind = bind;
        }
        if let Some(base_path) = lookup("LABSITE_BASE_PATH") {
            self.export.base_path = base_path;
        }
    }

    pub fn validate(&mut self) -> Result<()> {
        self.export.base_path = normalize_base_path(&self.export.base_path)?;
        if !self.site.brand.is_valid() {
            return Err(LabsiteError::Config(
                "site.brand colours must be #rgb or #rrggbb hex values".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured content file, or the built-in demo catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.content.path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::demo()),
        }
    }
}

/// `""` and `"/"` mean no prefix; anything else becomes `/segment[/segment]`
/// with no trailing slash.
pub fn normalize_base_path(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if trimmed.contains(|c: char| matches!(c, '?' | '#') || c.is_whitespace())
        || trimmed.contains("//")
    {
        return Err(LabsiteError::Config(format!("invalid base path: {raw}")));
    }
    Ok(format!("/{trimmed}"))
}
