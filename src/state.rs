use std::sync::Arc;

use crate::infrastructure::transcribe::TranscriptionService;
use crate::modules::transcribe::observer::SubmissionObserver;

/// Handles that live for the whole execution environment, shared by every
/// invocation it serves.
#[derive(Clone)]
pub struct AppState {
    pub transcriber: Arc<dyn TranscriptionService>,
    pub observer: Arc<dyn SubmissionObserver>,
}

impl AppState {
    pub fn new(
        transcriber: Arc<dyn TranscriptionService>,
        observer: Arc<dyn SubmissionObserver>,
    ) -> Self {
        Self {
            transcriber,
            observer,
        }
    }
}
