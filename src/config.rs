//! Site configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock site: port 8000, the `public/` directory, 800 ms transitions and the
//! 768 / 1024 px breakpoints.
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [carousel]
//! autoplay_interval_ms = 3000
//!
//! [viewport]
//! desktop_min_width = 1200
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::carousel::{Breakpoints, CarouselSettings};
use crate::error::{Error, Result};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub carousel: CarouselSettings,
    pub viewport: Breakpoints,
}

/// Static file server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as the site root.
    pub root: PathBuf,
    /// Bake the initial carousel state into served `.html` files.
    pub prerender: bool,
    /// Viewport width assumed when pre-rendering.
    pub prerender_width: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            root: PathBuf::from("public"),
            prerender: true,
            prerender_width: 1280,
        }
    }
}

impl SiteConfig {
    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
