use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::config::Builder;
use aws_sdk_transcribe::operation::start_transcription_job::StartTranscriptionJobOutput;
use aws_sdk_transcribe::types::{LanguageCode, Media, MediaFormat};
use tracing::{debug, info, warn};

use super::{TranscriptionService, TranscriptionServiceError};
use crate::modules::transcribe::model::{JobAcknowledgement, TranscriptionRequest};

#[derive(Clone)]
pub struct AwsTranscribeService {
    pub client: Client,
}

impl AwsTranscribeService {
    /// Credentials and region come from the default provider chain (the
    /// function's execution role when deployed).
    pub async fn new(endpoint: Option<&str>) -> Self {
        let shared = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let mut config = Builder::from(&shared);
        if let Some(endpoint) = endpoint {
            info!("Using Transcribe endpoint override {}", endpoint);
            config = config.endpoint_url(endpoint);
        }

        let client = Client::from_conf(config.build());

        info!("✅ Transcribe client ready");

        Self { client }
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscribeService {
    async fn start_job(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<JobAcknowledgement, TranscriptionServiceError> {
        let media = Media::builder()
            .media_file_uri(&request.media_uri)
            .build();

        let result = self
            .client
            .start_transcription_job()
            .transcription_job_name(request.job_name.as_str())
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .media(media)
            .media_format(MediaFormat::from(request.media_format.as_str()))
            .output_bucket_name(&request.output_bucket)
            .output_key(&request.output_key)
            .set_output_encryption_kms_key_id(request.output_encryption_key_id.clone())
            .send()
            .await?;

        Ok(acknowledge(request, &result))
    }
}

/// The job counts as accepted once the call succeeds, with or without a
/// job description in the response.
fn acknowledge(
    request: &TranscriptionRequest,
    output: &StartTranscriptionJobOutput,
) -> JobAcknowledgement {
    let status = match output.transcription_job() {
        Some(job) => {
            debug!("StartTranscriptionJob response: {:?}", job);
            job.transcription_job_status()
                .map(|status| status.as_str().to_string())
        }
        None => {
            warn!(
                job_name = %request.job_name,
                "StartTranscriptionJob succeeded without a job description"
            );
            None
        }
    };

    JobAcknowledgement {
        job_name: request.job_name.clone(),
        status,
    }
}
