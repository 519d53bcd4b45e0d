use thiserror::Error;
use validator::ValidationErrors;

use crate::infrastructure::transcribe::TranscriptionServiceError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("LANGUAGE_CODE {0:?} contains an empty language code")]
    EmptyLanguageCode(String),
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("event contains no notification records")]
    NoRecords,
    #[error("notification record is missing the {0}")]
    MalformedRecord(&'static str),
    #[error("Invalid file extension {0:?}, unsupported Amazon Transcribe file type")]
    UnsupportedFormat(String),
    #[error("failed to start transcription job {job_name} for language {language}: {source}")]
    Submission {
        language: String,
        job_name: String,
        #[source]
        source: TranscriptionServiceError,
    },
}
