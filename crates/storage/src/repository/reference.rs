use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Distance, Lot, Profile};

/// Batch loader for secondary entities referenced from a page or full
/// result set. One in-set query per entity kind instead of one query per
/// row; an empty id set returns an empty map without touching the store.
pub struct ReferenceResolver<'a> {
    pool: &'a PgPool,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn profiles_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Profile>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let profiles: Vec<Profile> = sqlx::query_as(
            r#"
            SELECT profile_id, display_name, avatar_url
            FROM profiles
            WHERE profile_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(profiles.into_iter().map(|p| (p.profile_id, p)).collect())
    }

    pub async fn distances_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Distance>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let distances: Vec<Distance> = sqlx::query_as(
            r#"
            SELECT distance_id, competition_id, label, meters, sort_order
            FROM distances
            WHERE distance_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(distances.into_iter().map(|d| (d.distance_id, d)).collect())
    }

    pub async fn lots_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Lot>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let lots: Vec<Lot> = sqlx::query_as(
            r#"
            SELECT lot_id, competition_id, name, description, price_cents,
                   currency, allows_subscription, is_active, sort_order
            FROM lots
            WHERE lot_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(lots.into_iter().map(|l| (l.lot_id, l)).collect())
    }
}
