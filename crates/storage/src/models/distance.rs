use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Distance {
    pub distance_id: Uuid,
    pub competition_id: Uuid,
    pub label: String,
    pub meters: i32,
    pub sort_order: i32,
}
