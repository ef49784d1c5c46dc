use sqlx::PgPool;
use storage::{
    dto::{competition::CompetitionDetailResponse, filter::CompetitionListFilter},
    error::Result,
    models::Competition,
    repository::competition::CompetitionRepository,
};
use uuid::Uuid;

/// List competitions matching the dashboard filters
pub async fn list_competitions(
    pool: &PgPool,
    filter: &CompetitionListFilter,
) -> Result<Vec<Competition>> {
    let now = chrono::Utc::now().naive_utc();
    let repo = CompetitionRepository::new(pool);
    repo.list(filter, now).await
}

/// Get one competition with reference listings and stats
pub async fn get_competition_detail(
    pool: &PgPool,
    competition_id: Uuid,
) -> Result<CompetitionDetailResponse> {
    let repo = CompetitionRepository::new(pool);
    repo.find_detailed(competition_id).await
}
