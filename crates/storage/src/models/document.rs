use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Document {
    pub document_id: Uuid,
    pub competition_id: Uuid,
    pub title: String,
    pub file_url: String,
    pub sort_order: i32,
}
