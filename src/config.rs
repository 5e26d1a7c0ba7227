use std::env;

pub const API_URL_VAR: &str = "API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Bundled config for mobile and web builds
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

/// Runtime configuration for the Kelvin client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Kelvin API, without a trailing slash.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }
}

impl Config {
    /// The configuration for this platform.
    ///
    /// Browsers have no process environment, so web builds read the bundled
    /// file directly.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_env()
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_bundled()
        }
    }

    pub fn from_bundled() -> Self {
        Self::from_env_file(BUNDLED_CONFIG)
    }

    /// Read settings from the text of an env file, ignoring the process environment.
    pub fn from_env_file(contents: &str) -> Self {
        let pairs = parse_env_lines(contents);
        Self::from_lookup(|key| {
            pairs
                .iter()
                .rev()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        })
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::with_api_url(&url),
            _ => Self::default(),
        }
    }

    pub fn with_api_url(url: &str) -> Self {
        Self {
            api_url: url.trim().trim_end_matches('/').to_string(),
        }
    }
}

/// Parse `KEY=VALUE` lines of a bundled env file, skipping blanks and `#` comments.
pub fn parse_env_lines(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
