//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Direct score submission (practice mode or contest finalization)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    pub question_id: Uuid,

    /// Present for contest submissions, absent for practice
    pub contest_id: Option<i64>,

    #[validate(range(min = 0))]
    pub score: i32,
}
