use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{CmsError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_UPLOADS_PATH: &str = "/static/uploads/";
const BASE_URL_ENV: &str = "CMS_BASE_URL";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub base_url: Option<String>,
    pub uploads_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| CmsError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| CmsError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "cms")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(CmsError::NoConfigDir)
    }

    /// Get base URL with env var taking precedence over config file
    pub fn base_url(&self) -> Result<Url> {
        self.resolve_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    fn resolve_base_url(&self, from_env: Option<String>) -> Result<Url> {
        let raw = from_env
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Url::parse(raw.trim()).map_err(|e| CmsError::InvalidBaseUrl {
            url: raw.clone(),
            source: e,
        })
    }

    /// Prefix prepended to stored image filenames, always ending in '/'
    pub fn uploads_path(&self) -> String {
        let path = self
            .uploads_path
            .as_deref()
            .unwrap_or(DEFAULT_UPLOADS_PATH);

        if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        }
    }
}
