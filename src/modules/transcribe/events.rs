use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::error::HandlerError;

/// Object-created notification as delivered by S3. Fields the handler
/// does not read are ignored on deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct S3EventRecord {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub s3: S3Entity,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: S3Bucket,
    #[serde(default)]
    pub object: S3Object,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct S3Object {
    pub key: Option<String>,
}

/// The bucket and key of the uploaded object. The key is kept exactly as
/// it appears in the notification, which is URL-encoded: S3 delivers a
/// space as `+` (and other reserved characters as `%XX`), so objects whose
/// names contain such characters produce a media URI that does not resolve
/// and the transcription job fails on the service side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub bucket: String,
    pub key: String,
}

impl S3Event {
    /// Only the first record is processed; any others are logged and skipped.
    pub fn first_record(self) -> Result<NotificationRecord, HandlerError> {
        let total = self.records.len();
        let record = self
            .records
            .into_iter()
            .next()
            .ok_or(HandlerError::NoRecords)?;

        if total > 1 {
            warn!(
                skipped = total - 1,
                "Event carries {} records, only the first is processed", total
            );
        }

        let bucket = record
            .s3
            .bucket
            .name
            .filter(|name| !name.is_empty())
            .ok_or(HandlerError::MalformedRecord("bucket name"))?;
        let key = record
            .s3
            .object
            .key
            .filter(|key| !key.is_empty())
            .ok_or(HandlerError::MalformedRecord("object key"))?;

        Ok(NotificationRecord { bucket, key })
    }
}
