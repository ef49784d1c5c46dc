use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sponsor {
    pub sponsor_id: Uuid,
    pub name: String,
    pub logo_url: String,
    pub link_url: Option<String>,
    pub sort_order: i32,
}
