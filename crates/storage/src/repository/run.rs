use std::collections::HashMap;

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::PageBounds;
use crate::error::Result;
use crate::models::Run;
use crate::models::run::RUN_FINISHED;

pub struct RunRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RunRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Finished runs in ranking order: longer distance first, then faster
    /// average pace, then run id to keep the order total.
    pub async fn finished_for_competition(
        &self,
        competition_id: Uuid,
        window: Option<PageBounds>,
    ) -> Result<Vec<Run>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT run_id, participant_id, competition_id, distance_m,
                   avg_pace_s, total_time_s, status, created_at
            FROM runs
            WHERE status =
            "#,
        );
        query.push_bind(RUN_FINISHED);
        query.push(" AND competition_id = ");
        query.push_bind(competition_id);
        query.push(" ORDER BY distance_m DESC, avg_pace_s ASC, run_id ASC");

        if let Some(bounds) = window {
            query.push(" LIMIT ");
            query.push_bind(bounds.limit);
            query.push(" OFFSET ");
            query.push_bind(bounds.offset);
        }

        let runs = query.build_query_as().fetch_all(self.pool).await?;

        Ok(runs)
    }

    pub async fn count_finished(&self, competition_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM runs
            WHERE status = $1 AND competition_id = $2
            "#,
        )
        .bind(RUN_FINISHED)
        .bind(competition_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Scored attempts per participant, regardless of run state. Participants
    /// with no runs are absent from the map; consumers default to 0.
    pub async fn attempt_counts(
        &self,
        competition_id: Uuid,
        participant_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>> {
        if participant_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(Uuid, i64)> = sqlx::query_as(
            r#"
            SELECT participant_id, COUNT(*)
            FROM runs
            WHERE competition_id = $1 AND participant_id = ANY($2)
            GROUP BY participant_id
            "#,
        )
        .bind(competition_id)
        .bind(participant_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(counts.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn attempt_counts_with_no_participants_skips_the_store() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        let repository = RunRepository::new(&pool);

        let counts = repository
            .attempt_counts(Uuid::new_v4(), &[])
            .await
            .unwrap();
        assert!(counts.is_empty());
    }
}
