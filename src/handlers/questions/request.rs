//! Question request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::Difficulty;

/// Update question request.
///
/// A changed `points` value triggers the full retroactive propagation
/// across users, groups, and contest rankings.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub slug: String,

    pub leetcode_url: Option<String>,
    pub codeforces_url: Option<String>,

    pub difficulty: Difficulty,

    #[validate(range(min = 0))]
    pub points: i32,

    /// Full replacement of the tag set, upserted by name
    pub tags: Vec<String>,
}
