use directories::BaseDirs;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/send-dm";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("dm-composer.toml"))
    }

    /// Read `dm-composer.toml` from the user config dir, or fall back to defaults.
    pub fn load() -> Self {
        match Self::toml_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// A missing file is silent; any other read or parse failure is logged.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Cannot read {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The relay URL, normalized. An unparseable value yields the default.
    pub fn endpoint_url(&self) -> Url {
        let normalized = normalize_url(&self.endpoint);
        Url::parse(&normalized).unwrap_or_else(|e| {
            log::warn!("Invalid endpoint '{}': {e}, using {DEFAULT_ENDPOINT}", self.endpoint);
            default_url()
        })
    }
}

fn default_url() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// The relay is local, so a bare `host:port/path` gets plain `http://`.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}
