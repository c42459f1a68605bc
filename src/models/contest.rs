//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::time::now_ist;

/// Contest database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contest {
    /// Current status, derived from the wall clock on every read.
    ///
    /// Both window boundaries are inclusive: a contest is ACTIVE at
    /// exactly `start_time` and at exactly `end_time`.
    pub fn status(&self) -> ContestStatus {
        let now = now_ist().with_timezone(&Utc);
        self.status_at(now)
    }

    /// Status at a given instant (separated from `status` for testability)
    pub fn status_at(&self, now: DateTime<Utc>) -> ContestStatus {
        if now < self.start_time {
            ContestStatus::Upcoming
        } else if now <= self.end_time {
            ContestStatus::Active
        } else {
            ContestStatus::Completed
        }
    }

    /// Server-authoritative expiry: start plus the configured duration
    pub fn expiry_time(&self) -> DateTime<Utc> {
        self.start_time + chrono::Duration::minutes(self.duration_minutes as i64)
    }
}

/// Contest status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContestStatus {
    Upcoming,
    Active,
    Completed,
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "UPCOMING"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn contest() -> Contest {
        let start = crate::utils::time::parse_datetime("2024-06-01T10:00:00Z").unwrap();
        Contest {
            id: 7,
            name: "Weekly Round".to_string(),
            start_time: start,
            end_time: start + Duration::hours(2),
            duration_minutes: 120,
            created_at: start - Duration::days(1),
            updated_at: start - Duration::days(1),
        }
    }

    #[test]
    fn test_status_boundaries_inclusive() {
        let c = contest();
        let one_sec = Duration::seconds(1);

        assert_eq!(c.status_at(c.start_time - one_sec), ContestStatus::Upcoming);
        assert_eq!(c.status_at(c.start_time), ContestStatus::Active);
        assert_eq!(c.status_at(c.end_time), ContestStatus::Active);
        assert_eq!(c.status_at(c.end_time + one_sec), ContestStatus::Completed);
    }

    #[test]
    fn test_expiry_time() {
        let c = contest();
        assert_eq!(c.expiry_time(), c.start_time + Duration::minutes(120));
    }
}
