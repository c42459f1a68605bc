//! Contest response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Contest, ContestStatus, Question};

/// Full contest view with derived status
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    #[serde(flatten)]
    pub contest: Contest,
    pub status: ContestStatus,
    pub questions: Vec<Question>,
    pub permitted_groups: Vec<Uuid>,
}

/// Successful admission into a contest
#[derive(Debug, Serialize)]
pub struct AdmissionResponse {
    pub admitted: bool,
    pub contest_id: i64,
    pub group_id: Uuid,
    pub group_score: f64,
    pub remaining_time_seconds: i64,
    pub questions: Vec<Question>,
}

/// Contest finalization result
#[derive(Debug, Serialize)]
pub struct EndContestResponse {
    pub ended: bool,
    /// Submissions created by this finalization pass
    pub newly_recorded: usize,
    /// Whether a contest submission now guards re-admission
    pub attempt_locked: bool,
}
