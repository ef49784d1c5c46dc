use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::registration::RegistrationRow,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::features::csv_attachment;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/registrations",
    params(
        ("id" = Uuid, Path, description = "Competition id"),
        PaginationParams
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "One page of registration rows", body = PaginatedResponse<RegistrationRow>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let (rows, total_items) = services::list_registrations(db.pool(), id, &params).await?;

    let response = PaginatedResponse::new(rows, params.page, params.page_size, total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}/registrations/export",
    params(
        ("id" = Uuid, Path, description = "Competition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "CSV file over the full registration set", body = String, content_type = "text/csv"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "No registrations to export")
    ),
    tag = "registrations"
)]
pub async fn export_registrations(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let bytes = services::export_registrations(db.pool(), id).await?;

    Ok(csv_attachment("inscricoes.csv", bytes))
}
