//! Question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::judge::Platform;

/// Question database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub slug: String,
    pub leetcode_url: Option<String>,
    pub codeforces_url: Option<String>,
    pub difficulty: Difficulty,
    /// Admin-editable; changes fan out through the scoring engine
    pub points: i32,
    pub in_arena: bool,
    pub arena_added_at: Option<DateTime<Utc>>,
    pub arena_order: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Which judge platform hosts this question (leetcode XOR codeforces)
    pub fn platform(&self) -> Option<Platform> {
        match (&self.leetcode_url, &self.codeforces_url) {
            (Some(_), None) => Some(Platform::LeetCode),
            (None, Some(_)) => Some(Platform::Codeforces),
            _ => None,
        }
    }
}

/// Question difficulty, ordered from easiest to hardest. Stored and
/// serialized as its uppercase name; unknown values fail decoding
/// instead of passing through as strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

/// Question tag
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Easy);
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::VeryHard);
    }

    #[test]
    fn test_difficulty_stored_names() {
        assert_eq!(
            serde_json::to_value(Difficulty::VeryHard).unwrap(),
            serde_json::json!("VERYHARD")
        );
        // Unknown variants are a decode error, not a passthrough string
        assert!(serde_json::from_str::<Difficulty>("\"IMPOSSIBLE\"").is_err());
    }

    #[test]
    fn test_question_platform() {
        let mut q = Question {
            id: Uuid::new_v4(),
            slug: "two-sum".to_string(),
            leetcode_url: Some("https://leetcode.com/problems/two-sum".to_string()),
            codeforces_url: None,
            difficulty: Difficulty::Easy,
            points: 2,
            in_arena: false,
            arena_added_at: None,
            arena_order: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(q.platform(), Some(Platform::LeetCode));

        q.leetcode_url = None;
        q.codeforces_url = Some("https://codeforces.com/problemset/problem/1/A".to_string());
        assert_eq!(q.platform(), Some(Platform::Codeforces));

        q.codeforces_url = None;
        assert_eq!(q.platform(), None);
    }
}
