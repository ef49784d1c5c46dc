use sqlx::PgPool;
use storage::{
    dto::{common::PaginationParams, registration::RegistrationRow},
    error::Result,
    services::{export, registrations},
};
use uuid::Uuid;

/// One page of registration rows plus the total non-cancelled count
pub async fn list_registrations(
    pool: &PgPool,
    competition_id: Uuid,
    params: &PaginationParams,
) -> Result<(Vec<RegistrationRow>, i64)> {
    registrations::list_page(pool, competition_id, params).await
}

/// CSV bytes over the full registration set
pub async fn export_registrations(pool: &PgPool, competition_id: Uuid) -> Result<Vec<u8>> {
    export::registrations_csv(pool, competition_id).await
}
