use std::collections::HashMap;

use chrono::NaiveDateTime;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::competition::CompetitionDetailResponse;
use crate::dto::filter::{self, CompetitionListFilter};
use crate::error::{Result, StorageError};
use crate::models::{Competition, Distance, Document, Lot, Sponsor};
use crate::repository::registration::RegistrationRepository;
use crate::services::stats;

const COMPETITION_COLUMNS: &str = r#"
    competition_id, title, subtitle, location, starts_at,
    registration_opens_at, registration_closes_at, mode, status, is_free,
    description, prize_text, championship_id, sponsor_ids, created_at
"#;

pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List competitions for the dashboard, newest start first. Display
    /// filter values are translated to storage predicates by `dto::filter`;
    /// `now` anchors the relative period filter.
    pub async fn list(
        &self,
        filter: &CompetitionListFilter,
        now: NaiveDateTime,
    ) -> Result<Vec<Competition>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE 1=1"
        ));

        if let Some(ref status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(filter::competition_status_predicate(status).to_string());
        }

        if let Some(ref mode) = filter.mode {
            query.push(" AND mode = ");
            query.push_bind(filter::mode_predicate(mode).to_string());
        }

        if let Some(is_free) = filter.pricing.as_deref().and_then(filter::pricing_predicate) {
            query.push(" AND is_free = ");
            query.push_bind(is_free);
        }

        if let Some(period) = filter.period {
            query.push(" AND starts_at >= ");
            query.push_bind(filter::period_cutoff(period, now));
        }

        query.push(" ORDER BY starts_at DESC NULLS LAST, created_at DESC");

        let competitions = query.build_query_as().fetch_all(self.pool).await?;

        Ok(competitions)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE competition_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Full detail view: the competition plus its reference listings and the
    /// attendance/revenue snapshot. The independent reads run concurrently;
    /// stats reuse the already-fetched registration and lot sets.
    pub async fn find_detailed(&self, id: Uuid) -> Result<CompetitionDetailResponse> {
        let competition = self.find_by_id(id).await?;

        let registrations = RegistrationRepository::new(self.pool);
        let (distances, lots, documents, sponsors, registration_rows) = tokio::try_join!(
            self.distances_for(id),
            self.lots_for(id),
            self.documents_for(id),
            self.sponsors_by_ids(&competition.sponsor_ids),
            registrations.list_for_competition(id, None),
        )?;

        let lots_by_id: HashMap<Uuid, Lot> =
            lots.iter().map(|l| (l.lot_id, l.clone())).collect();
        let stats = stats::registration_stats(&registration_rows, &lots_by_id);

        Ok(CompetitionDetailResponse {
            competition,
            distances,
            lots,
            documents,
            sponsors,
            stats,
        })
    }

    pub async fn distances_for(&self, competition_id: Uuid) -> Result<Vec<Distance>> {
        let distances = sqlx::query_as(
            r#"
            SELECT distance_id, competition_id, label, meters, sort_order
            FROM distances
            WHERE competition_id = $1
            ORDER BY sort_order, meters
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(distances)
    }

    pub async fn lots_for(&self, competition_id: Uuid) -> Result<Vec<Lot>> {
        let lots = sqlx::query_as(
            r#"
            SELECT lot_id, competition_id, name, description, price_cents,
                   currency, allows_subscription, is_active, sort_order
            FROM lots
            WHERE competition_id = $1
            ORDER BY sort_order, name
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lots)
    }

    pub async fn documents_for(&self, competition_id: Uuid) -> Result<Vec<Document>> {
        let documents = sqlx::query_as(
            r#"
            SELECT document_id, competition_id, title, file_url, sort_order
            FROM competition_documents
            WHERE competition_id = $1
            ORDER BY sort_order, title
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(documents)
    }

    pub async fn sponsors_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Sponsor>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sponsors = sqlx::query_as(
            r#"
            SELECT sponsor_id, name, logo_url, link_url, sort_order
            FROM sponsors
            WHERE sponsor_id = ANY($1)
            ORDER BY sort_order, name
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(sponsors)
    }
}
