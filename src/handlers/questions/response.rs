//! Question response DTOs

use serde::Serialize;

use crate::models::{Question, Tag};

/// Question with its tag set
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    #[serde(flatten)]
    pub question: Question,
    pub tags: Vec<Tag>,
}

/// Practice-mode verification result
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub solved: bool,
    /// True when the question was already credited to this user
    pub already_attempted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<i32>,
}
