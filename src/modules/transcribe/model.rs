use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::events::NotificationRecord;
use crate::common::error::HandlerError;
use crate::config::settings::AppConfig;

/// Container/codec formats Amazon Transcribe accepts for batch jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Amr,
    Flac,
    M4a,
    Mp3,
    Mp4,
    Ogg,
    Webm,
    Wav,
}

impl MediaFormat {
    pub const ALL: [MediaFormat; 8] = [
        MediaFormat::Amr,
        MediaFormat::Flac,
        MediaFormat::M4a,
        MediaFormat::Mp3,
        MediaFormat::Mp4,
        MediaFormat::Ogg,
        MediaFormat::Webm,
        MediaFormat::Wav,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Amr => "amr",
            MediaFormat::Flac => "flac",
            MediaFormat::M4a => "m4a",
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Ogg => "ogg",
            MediaFormat::Webm => "webm",
            MediaFormat::Wav => "wav",
        }
    }

    /// Derives the format from the extension of an object key. Only the
    /// last path segment is considered, so `v1.2/recording` has no extension.
    pub fn from_key(key: &str) -> Result<Self, HandlerError> {
        let file_name = key.rsplit('/').next().unwrap_or(key);
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default();

        extension.parse()
    }
}

impl FromStr for MediaFormat {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        MediaFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| HandlerError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub job_name: JobName,
    pub language_code: String,
    pub media_uri: String,
    pub media_format: MediaFormat,
    pub output_bucket: String,
    pub output_key: String,
    pub output_encryption_key_id: Option<String>,
}

impl TranscriptionRequest {
    pub fn new(
        record: &NotificationRecord,
        media_format: MediaFormat,
        language_code: &str,
        config: &AppConfig,
    ) -> Self {
        Self {
            job_name: JobName::generate(&config.job_name_prefix),
            language_code: language_code.to_string(),
            media_uri: media_uri(&record.bucket, &record.key),
            media_format,
            output_bucket: config.output_bucket.clone(),
            output_key: output_key(&record.key, language_code),
            output_encryption_key_id: config.dest_key_id.clone(),
        }
    }
}

pub fn media_uri(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}

pub fn output_key(key: &str, language_code: &str) -> String {
    format!("{}_Transcription_{}.json", key, language_code)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobAcknowledgement {
    pub job_name: JobName,
    pub status: Option<String>,
}
