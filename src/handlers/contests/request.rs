//! Contest request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    /// Contest start time
    pub start_time: DateTime<Utc>,

    /// Contest end time
    pub end_time: DateTime<Utc>,

    /// Duration in minutes; derived from the window when omitted
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
}

/// Bulk contest update request; every field is optional and all
/// supplied changes apply atomically
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContestRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,

    /// Full replacement of the contest's question set
    pub question_ids: Option<Vec<Uuid>>,

    /// Full replacement of the permitted-group allow-list
    pub permitted_group_ids: Option<Vec<Uuid>>,
}

/// End-contest finalization request
#[derive(Debug, Deserialize)]
pub struct EndContestRequest {
    pub final_score: i32,

    /// Advisory; the authoritative expiry is server-derived
    pub remaining_time_seconds: i64,

    /// Questions the client verified during the attempt
    pub verified_question_ids: Vec<Uuid>,
}

/// Push a question into a running contest
#[derive(Debug, Deserialize)]
pub struct PushQuestionRequest {
    pub question_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(duration_minutes: Option<i32>) -> UpdateContestRequest {
        UpdateContestRequest {
            name: None,
            start_time: None,
            end_time: None,
            duration_minutes,
            question_ids: None,
            permitted_group_ids: None,
        }
    }

    #[test]
    fn test_update_duration_must_be_positive() {
        assert!(update(Some(0)).validate().is_err());
        assert!(update(Some(-30)).validate().is_err());
        assert!(update(Some(90)).validate().is_ok());
        assert!(update(None).validate().is_ok());
    }
}
