use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::common::error::ConfigError;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_JOB_NAME_PREFIX: &str = "s3-lambda-audio-transcribe";

/// Per-invocation settings. Built once at invocation entry and handed to
/// the handler by reference.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1, message = "LANGUAGE_CODE must not be empty"))]
    pub language_code: String,
    #[validate(length(min = 1, message = "OUTPUT_BUCKET must not be empty"))]
    pub output_bucket: String,
    pub dest_key_id: Option<String>,
    // Job names are capped at 200 characters; leave room for "-" and a UUID.
    #[validate(
        length(min = 1, max = 160, message = "JOB_NAME_PREFIX must be 1-160 characters"),
        custom(function = "validate_job_name_prefix")
    )]
    pub job_name_prefix: String,
}

/// Transcription job names must match `^[0-9a-zA-Z._-]+`.
fn validate_job_name_prefix(prefix: &str) -> Result<(), ValidationError> {
    let valid = prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("job_name_prefix").with_message(Cow::Borrowed(
            "JOB_NAME_PREFIX may only contain letters, digits, '.', '_' and '-'",
        )))
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::require(EnvKey::LanguageCode)?,
            env::require(EnvKey::OutputBucket)?,
            env::get_opt(EnvKey::DestKeyId),
            env::get_or(EnvKey::JobNamePrefix, DEFAULT_JOB_NAME_PREFIX),
        )
    }

    pub fn from_parts(
        language_code: impl Into<String>,
        output_bucket: impl Into<String>,
        dest_key_id: Option<String>,
        job_name_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let language_code: String = language_code.into();
        let output_bucket: String = output_bucket.into();
        let job_name_prefix: String = job_name_prefix.into();

        let config = Self {
            language_code: language_code.trim().to_string(),
            output_bucket: output_bucket.trim().to_string(),
            dest_key_id: dest_key_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            job_name_prefix: job_name_prefix.trim().to_string(),
        };

        config.validate()?;
        config.language_codes()?;

        Ok(config)
    }

    /// Splits the language specifier on commas, keeping configured order.
    pub fn language_codes(&self) -> Result<Vec<String>, ConfigError> {
        self.language_code
            .split(',')
            .map(str::trim)
            .map(|code| {
                if code.is_empty() {
                    Err(ConfigError::EmptyLanguageCode(self.language_code.clone()))
                } else {
                    Ok(code.to_string())
                }
            })
            .collect()
    }
}
