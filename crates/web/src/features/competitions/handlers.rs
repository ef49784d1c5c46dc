use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{competition::CompetitionDetailResponse, filter::CompetitionListFilter},
    models::Competition,
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    params(CompetitionListFilter),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competitions matching the filters", body = Vec<Competition>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(db): State<Database>,
    Query(filter): Query<CompetitionListFilter>,
) -> Result<Response, WebError> {
    let competitions = services::list_competitions(db.pool(), &filter).await?;

    Ok(Json(competitions).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = Uuid, Path, description = "Competition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition with distances, lots, documents, sponsors and stats", body = CompetitionDetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition_detail(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let detail = services::get_competition_detail(db.pool(), id).await?;

    Ok(Json(detail).into_response())
}
