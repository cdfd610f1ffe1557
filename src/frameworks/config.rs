use std::{env, path::PathBuf};
use thiserror::Error;
use url::Url;

// Runtime configuration for the client, read from the environment.

pub const API_URL_VAR: &str = "WISHLIST_API_URL";
pub const SESSION_FILE_VAR: &str = "WISHLIST_SESSION_FILE";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL {0:?} must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub session_file: PathBuf,
}

impl Config {
    // Command-line overrides win over the environment.
    pub fn load(
        api_url: Option<String>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), api_url, session_file)
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        api_url: Option<String>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let raw_url = api_url
            .or_else(|| lookup(API_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = parse_api_url(&raw_url)?;

        let session_file = session_file
            .or_else(|| lookup(SESSION_FILE_VAR).map(PathBuf::from))
            .unwrap_or_else(default_session_file);

        Ok(Self {
            api_url,
            session_file,
        })
    }

    // Base URL without a trailing slash, ready for endpoint paths.
    pub fn api_base(&self) -> String {
        self.api_url.as_str().trim_end_matches('/').to_string()
    }

    // Scheme, host and port; the scope the stored token belongs to.
    pub fn origin(&self) -> String {
        self.api_url.origin().ascii_serialization()
    }
}

pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidApiUrl {
        value: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    Ok(url)
}

fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("wishlist").join("session.toml"))
        .unwrap_or_else(|| PathBuf::from(".wishlist-session.toml"))
}
