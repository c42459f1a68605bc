//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
///
/// Created exactly once per successful verification event (practice)
/// or at end-of-contest finalization; immutable afterwards except
/// through the point-propagation flow.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub question_id: Uuid,
    pub contest_id: Option<i64>,
    pub score: i32,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

/// Submission status, stored and serialized as its uppercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum SubmissionStatus {
    Accepted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_stored_name() {
        assert_eq!(
            serde_json::to_value(SubmissionStatus::Accepted).unwrap(),
            serde_json::json!("ACCEPTED")
        );
    }
}
