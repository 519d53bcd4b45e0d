use super::events::S3Event;
use super::model::MediaFormat;
use super::service::TranscribeService;
use crate::common::error::HandlerError;
use crate::config::settings::AppConfig;
use crate::state::AppState;

pub const SUCCESS_STATUS: &str = "200 OK";

/// Starts one transcription job per configured language for the object
/// named in the event's first record.
///
/// Nothing is submitted when the record is missing, the extension is not
/// a supported media format, or the language list is malformed. A failed
/// submission aborts the remaining languages and fails the invocation.
pub async fn handle(
    state: &AppState,
    config: &AppConfig,
    event: S3Event,
) -> Result<&'static str, HandlerError> {
    let record = event.first_record()?;
    let media_format = MediaFormat::from_key(&record.key)?;
    let languages = config.language_codes()?;

    state.observer.file_started(&record, &languages);

    let jobs =
        TranscribeService::submit_all(state, config, &record, media_format, &languages).await?;

    state.observer.file_completed(&record, &jobs);

    Ok(SUCCESS_STATUS)
}
