//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::judge::Platform;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    /// LeetCode handle used by the external judge verifier
    pub leetcode_username: Option<String>,
    /// Codeforces handle used by the external judge verifier
    pub codeforces_username: Option<String>,
    /// Running total of points; mutated only by the scoring engine
    pub individual_points: i32,
    /// At most one group at a time
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The user's handle on the given judge platform, if linked
    pub fn handle_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::LeetCode => self.leetcode_username.as_deref(),
            Platform::Codeforces => self.codeforces_username.as_deref(),
        }
    }
}
