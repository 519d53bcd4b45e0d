use std::env;
use std::str::FromStr;

use crate::common::error::ConfigError;

pub enum EnvKey {
    LanguageCode,
    OutputBucket,
    DestKeyId,
    JobNamePrefix,
    TranscribeEndpoint,
    LogFormat,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::LanguageCode => "LANGUAGE_CODE",
            EnvKey::OutputBucket => "OUTPUT_BUCKET",
            EnvKey::DestKeyId => "DEST_KEY_ID",
            EnvKey::JobNamePrefix => "JOB_NAME_PREFIX",
            EnvKey::TranscribeEndpoint => "TRANSCRIBE_ENDPOINT",
            EnvKey::LogFormat => "LOG_FORMAT",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Like [`get`], but reports the variable name when it is absent.
pub fn require(key: EnvKey) -> Result<String, ConfigError> {
    let name = key.as_str();
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

/// Blank values count as unset.
pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str())
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
