use super::events::NotificationRecord;
use super::model::{JobAcknowledgement, MediaFormat, TranscriptionRequest};
use crate::common::error::HandlerError;
use crate::config::settings::AppConfig;
use crate::state::AppState;

pub struct TranscribeService;

impl TranscribeService {
    /// Submits one job per language, strictly in order. The first failure
    /// stops the loop; languages after it are never submitted.
    pub async fn submit_all(
        state: &AppState,
        config: &AppConfig,
        record: &NotificationRecord,
        media_format: MediaFormat,
        languages: &[String],
    ) -> Result<Vec<JobAcknowledgement>, HandlerError> {
        let mut jobs = Vec::with_capacity(languages.len());

        for language in languages {
            let request = TranscriptionRequest::new(record, media_format, language, config);
            jobs.push(Self::submit(state, request).await?);
        }

        Ok(jobs)
    }

    async fn submit(
        state: &AppState,
        request: TranscriptionRequest,
    ) -> Result<JobAcknowledgement, HandlerError> {
        state.observer.submitting(&request);

        match state.transcriber.start_job(&request).await {
            Ok(ack) => {
                state.observer.acknowledged(&request, &ack);
                Ok(ack)
            }
            Err(e) => {
                state.observer.failed(&request, &e);
                Err(HandlerError::Submission {
                    language: request.language_code,
                    job_name: request.job_name.to_string(),
                    source: e,
                })
            }
        }
    }
}
