use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::PageBounds;
use crate::error::Result;
use crate::models::Registration;
use crate::models::registration::STATUS_CANCELLED;

pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Registrations for a competition, most recent first. The ordering is
    /// the single source of truth shared by the paginated listing and the
    /// unpaginated CSV export; `registration_id` breaks creation-time ties
    /// so it stays stable.
    pub async fn list_for_competition(
        &self,
        competition_id: Uuid,
        window: Option<PageBounds>,
    ) -> Result<Vec<Registration>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT registration_id, competition_id, participant_id,
                   distance_id, lot_id, status, created_at
            FROM registrations
            WHERE competition_id =
            "#,
        );
        query.push_bind(competition_id);
        query.push(" ORDER BY created_at DESC, registration_id DESC");

        if let Some(bounds) = window {
            query.push(" LIMIT ");
            query.push_bind(bounds.limit);
            query.push(" OFFSET ");
            query.push_bind(bounds.offset);
        }

        let registrations = query.build_query_as().fetch_all(self.pool).await?;

        Ok(registrations)
    }

    /// Total non-cancelled registrations, independent of any page window.
    pub async fn count_active(&self, competition_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM registrations
            WHERE competition_id = $1 AND status <> $2
            "#,
        )
        .bind(competition_id)
        .bind(STATUS_CANCELLED)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
