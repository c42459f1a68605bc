//! Real-time question broadcast
//!
//! Publishes newly pushed questions on a per-contest Redis channel so
//! connected clients can update their question list without a reload.
//! Messages carry the question id; clients deduplicate on it, so
//! duplicate or out-of-order delivery is harmless.

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::{error::AppResult, models::Question};

/// Payload broadcast when a question is injected into a live contest
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPush {
    /// Dedup key for clients
    pub question_id: uuid::Uuid,
    pub contest_id: i64,
    pub question: Question,
}

/// Broadcast service for the question-push channel
pub struct BroadcastService;

impl BroadcastService {
    /// Redis channel carrying question pushes for one contest
    pub fn question_channel(contest_id: i64) -> String {
        format!("contest:{}:questions", contest_id)
    }

    /// Publish a question push to the contest's channel
    pub async fn publish_question(
        mut redis: ConnectionManager,
        contest_id: i64,
        question: &Question,
    ) -> AppResult<()> {
        let push = QuestionPush {
            question_id: question.id,
            contest_id,
            question: question.clone(),
        };

        let payload = serde_json::to_string(&push)
            .map_err(|e| crate::error::AppError::Internal(e.into()))?;

        redis
            .publish::<_, _, ()>(Self::question_channel(contest_id), payload)
            .await?;

        tracing::info!(
            contest_id = contest_id,
            question_id = %question.id,
            "Question push broadcast"
        );

        Ok(())
    }

    /// Open a dedicated pub/sub connection subscribed to the contest's
    /// question channel
    pub async fn subscribe_questions(
        client: &redis::Client,
        contest_id: i64,
    ) -> AppResult<redis::aio::PubSub> {
        let mut pubsub = client.get_async_pubsub().await?;
        pubsub
            .subscribe(Self::question_channel(contest_id))
            .await?;

        Ok(pubsub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_question_channel_name() {
        assert_eq!(BroadcastService::question_channel(7), "contest:7:questions");
    }

    #[test]
    fn test_question_push_round_trip() {
        let question = Question {
            id: uuid::Uuid::new_v4(),
            slug: "two-sum".to_string(),
            leetcode_url: Some("https://leetcode.com/problems/two-sum".to_string()),
            codeforces_url: None,
            difficulty: Difficulty::Easy,
            points: 2,
            in_arena: false,
            arena_added_at: None,
            arena_order: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let push = QuestionPush {
            question_id: question.id,
            contest_id: 7,
            question,
        };

        let payload = serde_json::to_string(&push).unwrap();
        let decoded: QuestionPush = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded.question_id, push.question_id);
        assert_eq!(decoded.contest_id, 7);
        assert_eq!(decoded.question.slug, "two-sum");
    }
}
