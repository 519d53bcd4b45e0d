pub mod observability;
pub mod transcribe;
