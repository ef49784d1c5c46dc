use sqlx::PgPool;
use storage::{
    dto::{common::PaginationParams, ranking::RankingRow},
    error::Result,
    services::{export, ranking},
};
use uuid::Uuid;

/// One page of the finishers ranking with dense, page-continuous positions
pub async fn list_ranking(
    pool: &PgPool,
    competition_id: Uuid,
    params: &PaginationParams,
) -> Result<(Vec<RankingRow>, i64)> {
    ranking::list_page(pool, competition_id, params).await
}

/// CSV bytes over the full ranking
pub async fn export_ranking(pool: &PgPool, competition_id: Uuid) -> Result<Vec<u8>> {
    export::ranking_csv(pool, competition_id).await
}
