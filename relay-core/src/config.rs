use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Connection details for the upstream weather provider.
///
/// Loaded once at startup and never mutated afterwards. The zero value (both
/// fields empty) is what the process runs with when the config file is
/// missing or malformed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream URL template with a single `%s` placeholder for the query,
    /// e.g. `"https://api.openweathermap.org/data/2.5/weather?q=%s&appid=KEY"`.
    pub url: String,

    /// Upstream access token. Parsed for parity with the provider's
    /// credential needs; the request flow does not attach it.
    pub token: String,
}

/// Failure to obtain a usable configuration from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Read and parse the JSON config file at `path`.
    ///
    /// Keys missing from the file are left at their zero value.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file at `path`, falling back to the zero-valued
    /// configuration if it cannot be read or parsed.
    ///
    /// Load failures are reported and never abort startup; requests served
    /// under a zero-valued config build a malformed upstream URL and fail per
    /// request instead.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::read(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("error loading config: {}; continuing with defaults", err);
                Self::default()
            }
        }
    }
}
