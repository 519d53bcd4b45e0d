use async_trait::async_trait;
use aws_sdk_transcribe::config::http::HttpResponse;
use aws_sdk_transcribe::error::{DisplayErrorContext, SdkError};
use aws_sdk_transcribe::operation::start_transcription_job::StartTranscriptionJobError;

use crate::modules::transcribe::model::{JobAcknowledgement, TranscriptionRequest};

pub mod client;

pub use client::AwsTranscribeService;

/// Starts jobs on a managed speech-to-text service. Resolves once the
/// service has accepted the job, not when the transcript is ready.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn start_job(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<JobAcknowledgement, TranscriptionServiceError>;
}

pub type StartJobSdkError = SdkError<StartTranscriptionJobError, HttpResponse>;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    // The SDK's own Display hides transport causes ("dispatch failure"),
    // so the whole chain is rendered here.
    #[error("start transcription job request failed: {}", DisplayErrorContext(.0))]
    Request(#[from] StartJobSdkError),
}
