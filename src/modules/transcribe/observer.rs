use tracing::{error, info};

use super::events::NotificationRecord;
use super::model::{JobAcknowledgement, TranscriptionRequest};
use crate::infrastructure::transcribe::TranscriptionServiceError;

/// Lifecycle hooks around job submission. All hooks default to no-ops.
pub trait SubmissionObserver: Send + Sync {
    fn file_started(&self, _record: &NotificationRecord, _languages: &[String]) {}

    fn submitting(&self, _request: &TranscriptionRequest) {}

    fn acknowledged(&self, _request: &TranscriptionRequest, _ack: &JobAcknowledgement) {}

    fn failed(&self, _request: &TranscriptionRequest, _error: &TranscriptionServiceError) {}

    fn file_completed(&self, _record: &NotificationRecord, _jobs: &[JobAcknowledgement]) {}
}

pub struct TracingObserver;

impl SubmissionObserver for TracingObserver {
    fn file_started(&self, record: &NotificationRecord, languages: &[String]) {
        info!(
            bucket = %record.bucket,
            key = %record.key,
            "Starting to process file {} for language codes {}",
            record.key,
            languages.join(",")
        );
    }

    fn submitting(&self, request: &TranscriptionRequest) {
        info!(
            job_name = %request.job_name,
            media_format = %request.media_format,
            output_key = %request.output_key,
            "Initializing the transcription job for language code {}",
            request.language_code
        );
    }

    fn acknowledged(&self, request: &TranscriptionRequest, ack: &JobAcknowledgement) {
        info!(
            job_name = %ack.job_name,
            status = ack.status.as_deref().unwrap_or("UNKNOWN"),
            "✅ Transcription job accepted for language code {}",
            request.language_code
        );
    }

    fn failed(&self, request: &TranscriptionRequest, err: &TranscriptionServiceError) {
        error!(
            job_name = %request.job_name,
            "❌ Failed to start transcription job for language code {}: {}",
            request.language_code,
            err
        );
    }

    fn file_completed(&self, record: &NotificationRecord, jobs: &[JobAcknowledgement]) {
        info!(
            key = %record.key,
            jobs = jobs.len(),
            "Completed the processing of file {}",
            record.key
        );
    }
}
