use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::{Instrument, info_span};

use crate::config::settings::AppConfig;
use crate::modules::transcribe::events::S3Event;
use crate::modules::transcribe::handler;
use crate::state::AppState;

pub async fn run(state: AppState) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| {
        let state = state.clone();
        async move { function_handler(&state, event).await }
    }))
    .await
}

/// Configuration is read fresh for every invocation, before the event is
/// looked at, so a bad environment fails before any external call.
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<S3Event>,
) -> Result<String, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    async move {
        let config = AppConfig::new()?;
        let status = handler::handle(state, &config, payload).await?;
        Ok::<_, Error>(status.to_string())
    }
    .instrument(span)
    .await
}
