//! Scoring and points propagation engine
//!
//! Two entry points: direct score recording (practice mode and contest
//! finalization), and retroactive propagation when an admin changes an
//! already-published question's point value. The propagation rewrites
//! every affected user's and group's points and re-ranks all groups in
//! every affected contest, inside one all-or-nothing transaction.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    constants::{GROUP_DELTA_MIN_DIVISOR, PROPAGATION_STATEMENT_TIMEOUT_SECONDS},
    db::repositories::{SubmissionRepository, SubmissionScope},
    error::AppResult,
};

/// Per-group aggregation row for one contest during propagation
#[derive(Debug, sqlx::FromRow)]
struct GroupSolveStats {
    id: Uuid,
    group_id: Uuid,
    member_count: i64,
    members_solved: i64,
}

/// Scoring service for business logic
pub struct ScoringService;

impl ScoringService {
    /// Record an accepted submission and credit the user's individual
    /// points, atomically.
    ///
    /// Returns `false` (no-op success) when the user already holds a
    /// submission for this question in the same scope; group points
    /// never accrue here.
    pub async fn record_submission(
        pool: &PgPool,
        user_id: &Uuid,
        question_id: &Uuid,
        contest_id: Option<i64>,
        score: i32,
    ) -> AppResult<bool> {
        let scope = contest_id.map_or(SubmissionScope::Practice, SubmissionScope::Contest);
        if SubmissionRepository::exists_for_question(pool, user_id, question_id, scope).await? {
            tracing::debug!(
                user_id = %user_id,
                question_id = %question_id,
                "Submission already recorded, skipping"
            );
            return Ok(false);
        }

        let mut tx = pool.begin().await?;

        let submission = SubmissionRepository::create_accepted(
            &mut *tx,
            user_id,
            question_id,
            contest_id,
            score,
        )
        .await?;

        sqlx::query(
            r#"
            UPDATE users
            SET individual_points = individual_points + $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(score)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            submission_id = %submission.id,
            user_id = %user_id,
            score = score,
            "Submission recorded"
        );

        Ok(true)
    }

    /// Fan out a question's point-value change to every holder of an
    /// accepted submission, and to every affected group and contest
    /// ranking. Runs inside the caller's transaction; the caller owns
    /// commit/rollback.
    pub async fn propagate_points_change(
        tx: &mut Transaction<'_, Postgres>,
        question_id: &Uuid,
        points_difference: i32,
    ) -> AppResult<()> {
        if points_difference == 0 {
            return Ok(());
        }

        // Every distinct user with an accepted submission gets the delta once
        sqlx::query(
            r#"
            UPDATE users
            SET individual_points = individual_points + $2, updated_at = NOW()
            WHERE id IN (
                SELECT DISTINCT user_id FROM submissions
                WHERE question_id = $1 AND status = 'ACCEPTED'
            )
            "#,
        )
        .bind(question_id)
        .bind(points_difference)
        .execute(&mut **tx)
        .await?;

        let contest_ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT contest_id FROM submissions
            WHERE question_id = $1 AND status = 'ACCEPTED' AND contest_id IS NOT NULL
            "#,
        )
        .bind(question_id)
        .fetch_all(&mut **tx)
        .await?;

        for contest_id in contest_ids {
            Self::propagate_to_contest(tx, question_id, contest_id, points_difference).await?;
        }

        Ok(())
    }

    /// Apply the group deltas for one contest, then re-rank all of its
    /// groups from a fully-updated view of their scores.
    async fn propagate_to_contest(
        tx: &mut Transaction<'_, Postgres>,
        question_id: &Uuid,
        contest_id: i64,
        points_difference: i32,
    ) -> AppResult<()> {
        // One aggregation query per contest: member count and solver
        // count for every participating group
        let stats = sqlx::query_as::<_, GroupSolveStats>(
            r#"
            SELECT
                goc.id,
                goc.group_id,
                (SELECT COUNT(*) FROM users u WHERE u.group_id = goc.group_id) AS member_count,
                (SELECT COUNT(DISTINCT s.user_id)
                   FROM submissions s
                   JOIN users su ON su.id = s.user_id
                  WHERE s.question_id = $1
                    AND s.contest_id = $2
                    AND s.status = 'ACCEPTED'
                    AND su.group_id = goc.group_id) AS members_solved
            FROM group_on_contests goc
            WHERE goc.contest_id = $2
            "#,
        )
        .bind(question_id)
        .bind(contest_id)
        .fetch_all(&mut **tx)
        .await?;

        for stat in &stats {
            let delta = group_points_delta(stat.members_solved, stat.member_count, points_difference);
            if delta == 0.0 {
                continue;
            }

            sqlx::query(r#"UPDATE groups SET group_points = group_points + $2 WHERE id = $1"#)
                .bind(stat.group_id)
                .bind(delta)
                .execute(&mut **tx)
                .await?;

            sqlx::query(r#"UPDATE group_on_contests SET score = score + $2 WHERE id = $1"#)
                .bind(stat.id)
                .bind(delta)
                .execute(&mut **tx)
                .await?;
        }

        // All score increments for the contest happen before this read,
        // so the re-rank observes the final standings
        let standings: Vec<(Uuid, f64)> = sqlx::query_as(
            r#"
            SELECT id, score FROM group_on_contests
            WHERE contest_id = $1
            ORDER BY score DESC, id ASC
            "#,
        )
        .bind(contest_id)
        .fetch_all(&mut **tx)
        .await?;

        for (record_id, rank) in assign_ranks(&standings) {
            sqlx::query(r#"UPDATE group_on_contests SET rank = $2 WHERE id = $1"#)
                .bind(record_id)
                .bind(rank)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    /// Begin a transaction bounded by the propagation statement timeout
    pub async fn begin_propagation_tx(pool: &PgPool) -> AppResult<Transaction<'_, Postgres>> {
        let mut tx = pool.begin().await?;
        sqlx::query(&format!(
            "SET LOCAL statement_timeout = '{}s'",
            PROPAGATION_STATEMENT_TIMEOUT_SECONDS
        ))
        .execute(&mut *tx)
        .await?;

        Ok(tx)
    }
}

/// A group's point delta for one contest when a question's value
/// changes by `points_difference`.
///
/// The divisor floors at `GROUP_DELTA_MIN_DIVISOR` members so very
/// small groups are not disproportionately rewarded or penalized
/// per-capita. Fractional results are expected.
pub fn group_points_delta(members_solved: i64, total_members: i64, points_difference: i32) -> f64 {
    let divisor = total_members.max(GROUP_DELTA_MIN_DIVISOR);
    (members_solved as f64 * points_difference as f64) / divisor as f64
}

/// Assign 1-based ranks to standings already sorted by score
/// descending. Ties keep their input order.
pub fn assign_ranks(standings: &[(Uuid, f64)]) -> Vec<(Uuid, i32)> {
    standings
        .iter()
        .enumerate()
        .map(|(idx, (id, _))| (*id, idx as i32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_points_delta_small_group_floor() {
        // m=2, s=2, delta=4: divisor floors at 4
        assert_eq!(group_points_delta(2, 2, 4), 4.0);
    }

    #[test]
    fn test_group_points_delta_large_group() {
        // m=10, s=3, delta=-2
        assert_eq!(group_points_delta(3, 10, -2), -0.6);
    }

    #[test]
    fn test_group_points_delta_mixed_group_sizes() {
        // Q repriced by +2 in contest 7:
        // G1 has 2 members, 1 solved: 1*2/max(4,2) = 0.5
        assert_eq!(group_points_delta(1, 2, 2), 0.5);
        // G2 has 4 members, 2 solved: 2*2/max(4,4) = 1.0
        assert_eq!(group_points_delta(2, 4, 2), 1.0);
    }

    #[test]
    fn test_group_points_delta_additive_across_repricings() {
        // Serialized repricings must conserve the net change: diffs
        // computed against each previously committed value (4->6 then
        // 6->8) sum to the single 4->8 diff. A stale read of the
        // original value would propagate 2 + 4 instead.
        let net = group_points_delta(3, 10, 4);
        assert_eq!(
            group_points_delta(3, 10, 2) + group_points_delta(3, 10, 2),
            net
        );
    }

    #[test]
    fn test_group_points_delta_no_solvers() {
        assert_eq!(group_points_delta(0, 8, 5), 0.0);
    }

    #[test]
    fn test_assign_ranks_no_gaps_or_duplicates() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let standings = vec![(a, 12.5), (b, 7.0), (c, 7.0)];

        let ranks = assign_ranks(&standings);
        assert_eq!(ranks, vec![(a, 1), (b, 2), (c, 3)]);

        let mut values: Vec<i32> = ranks.iter().map(|(_, r)| *r).collect();
        values.sort();
        values.dedup();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_assign_ranks_empty() {
        assert!(assign_ranks(&[]).is_empty());
    }
}
