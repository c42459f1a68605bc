//! Submission response DTOs

use serde::Serialize;

/// Score-submit result
#[derive(Debug, Serialize)]
pub struct RecordSubmissionResponse {
    /// False when the submission already existed (no-op)
    pub recorded: bool,
}
