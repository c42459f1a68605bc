//! Group and group-attempt models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A group's attempt record within one contest.
///
/// Created lazily on the group's first successful admission; `score`
/// and `rank` are rewritten by the scoring engine on every scoring
/// event for the contest. Unique per (group, contest) pair.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GroupOnContest {
    pub id: Uuid,
    pub group_id: Uuid,
    pub contest_id: i64,
    pub score: f64,
    /// 1-based position after the latest re-rank; 0 before any scoring event
    pub rank: i32,
    pub created_at: DateTime<Utc>,
}

/// One row of a contest's standings view
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StandingEntry {
    pub group_id: Uuid,
    pub group_name: String,
    pub score: f64,
    pub rank: i32,
}
