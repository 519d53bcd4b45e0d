mod common;

use std::sync::Arc;

use audio_transcribe::common::error::HandlerError;
use audio_transcribe::modules::transcribe::events::S3Event;
use audio_transcribe::modules::transcribe::handler::handle;

use common::{RecordingObserver, RecordingTranscriber, config, state_with};

const PUT_NOTIFICATION: &str = r#"{
  "Records": [
    {
      "eventVersion": "2.1",
      "eventSource": "aws:s3",
      "awsRegion": "us-east-1",
      "eventTime": "2024-03-01T12:00:00.000Z",
      "eventName": "ObjectCreated:Put",
      "userIdentity": { "principalId": "AWS:EXAMPLE" },
      "requestParameters": { "sourceIPAddress": "127.0.0.1" },
      "responseElements": { "x-amz-request-id": "C3D13FE58DE4C810" },
      "s3": {
        "s3SchemaVersion": "1.0",
        "configurationId": "transcribe-trigger",
        "bucket": {
          "name": "source-bucket",
          "ownerIdentity": { "principalId": "EXAMPLE" },
          "arn": "arn:aws:s3:::source-bucket"
        },
        "object": {
          "key": "meetings/weekly+sync.WebM",
          "size": 1024,
          "eTag": "d41d8cd98f00b204e9800998ecf8427e",
          "sequencer": "0055AED6DCD90281E5"
        }
      }
    }
  ]
}"#;

#[test]
fn given_s3_put_notification_when_deserializing_then_first_record_has_bucket_and_raw_key() {
    let event: S3Event = serde_json::from_str(PUT_NOTIFICATION).unwrap();

    assert_eq!(event.records.len(), 1);
    assert_eq!(event.records[0].event_name.as_deref(), Some("ObjectCreated:Put"));

    let record = event.first_record().unwrap();
    assert_eq!(record.bucket, "source-bucket");
    assert_eq!(record.key, "meetings/weekly+sync.WebM");
}

#[test]
fn given_payload_without_records_when_deserializing_then_event_is_empty() {
    let event: S3Event = serde_json::from_str("{}").unwrap();

    assert!(event.records.is_empty());
    assert!(matches!(event.first_record(), Err(HandlerError::NoRecords)));
}

#[test]
fn given_record_without_bucket_name_when_extracting_then_record_is_malformed() {
    let event: S3Event =
        serde_json::from_str(r#"{"Records":[{"s3":{"bucket":{},"object":{"key":"a.mp3"}}}]}"#)
            .unwrap();

    assert!(matches!(
        event.first_record(),
        Err(HandlerError::MalformedRecord("bucket name"))
    ));
}

#[tokio::test]
async fn given_deserialized_notification_when_handling_then_submits_for_raw_key() {
    let transcriber = Arc::new(RecordingTranscriber::default());
    let state = state_with(transcriber.clone(), Arc::new(RecordingObserver::default()));
    let event: S3Event = serde_json::from_str(PUT_NOTIFICATION).unwrap();

    handle(&state, &config("en-US"), event).await.unwrap();

    let submitted = transcriber.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(
        submitted[0].media_uri,
        "s3://source-bucket/meetings/weekly+sync.WebM"
    );
    assert_eq!(submitted[0].media_format.as_str(), "webm");
}
