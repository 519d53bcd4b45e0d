use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use audio_transcribe::config::settings::{AppConfig, DEFAULT_JOB_NAME_PREFIX};
use audio_transcribe::infrastructure::transcribe::{
    StartJobSdkError, TranscriptionService, TranscriptionServiceError,
};
use audio_transcribe::modules::transcribe::events::{
    NotificationRecord, S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object,
};
use audio_transcribe::modules::transcribe::model::{JobAcknowledgement, TranscriptionRequest};
use audio_transcribe::modules::transcribe::observer::SubmissionObserver;
use audio_transcribe::state::AppState;

/// Records every request it sees and optionally rejects one language.
#[derive(Default)]
pub struct RecordingTranscriber {
    pub requests: Mutex<Vec<TranscriptionRequest>>,
    pub fail_language: Option<String>,
}

impl RecordingTranscriber {
    pub fn failing_on(language: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_language: Some(language.to_string()),
        }
    }

    pub fn submitted(&self) -> Vec<TranscriptionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptionService for RecordingTranscriber {
    async fn start_job(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<JobAcknowledgement, TranscriptionServiceError> {
        self.requests.lock().unwrap().push(request.clone());

        if self.fail_language.as_deref() == Some(request.language_code.as_str()) {
            return Err(TranscriptionServiceError::from(
                StartJobSdkError::timeout_error(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            ));
        }

        Ok(JobAcknowledgement {
            job_name: request.job_name.clone(),
            status: Some("IN_PROGRESS".to_string()),
        })
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SubmissionObserver for RecordingObserver {
    fn file_started(&self, record: &NotificationRecord, languages: &[String]) {
        self.push(format!("started {} {}", record.key, languages.join(",")));
    }

    fn submitting(&self, request: &TranscriptionRequest) {
        self.push(format!("submitting {}", request.language_code));
    }

    fn acknowledged(&self, request: &TranscriptionRequest, _ack: &JobAcknowledgement) {
        self.push(format!("acknowledged {}", request.language_code));
    }

    fn failed(&self, request: &TranscriptionRequest, _error: &TranscriptionServiceError) {
        self.push(format!("failed {}", request.language_code));
    }

    fn file_completed(&self, record: &NotificationRecord, jobs: &[JobAcknowledgement]) {
        self.push(format!("completed {} {}", record.key, jobs.len()));
    }
}

pub fn state_with(
    transcriber: Arc<RecordingTranscriber>,
    observer: Arc<RecordingObserver>,
) -> AppState {
    AppState::new(transcriber, observer)
}

pub fn config(language_code: &str) -> AppConfig {
    AppConfig::from_parts(
        language_code,
        "transcripts-bucket",
        Some("dest-key-id".to_string()),
        DEFAULT_JOB_NAME_PREFIX,
    )
    .unwrap()
}

pub fn s3_event(bucket: &str, key: &str) -> S3Event {
    S3Event {
        records: vec![S3EventRecord {
            event_name: Some("ObjectCreated:Put".to_string()),
            s3: S3Entity {
                bucket: S3Bucket {
                    name: Some(bucket.to_string()),
                },
                object: S3Object {
                    key: Some(key.to_string()),
                },
            },
        }],
    }
}
