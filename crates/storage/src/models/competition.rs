use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const COMPETITION_DRAFT: &str = "draft";
pub const COMPETITION_OPEN: &str = "open";
pub const COMPETITION_CLOSED: &str = "closed";
pub const COMPETITION_IN_PROGRESS: &str = "in_progress";
pub const COMPETITION_FINISHED: &str = "finished";

pub const MODE_INDOOR: &str = "indoor";
pub const MODE_OUTDOOR: &str = "outdoor";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub competition_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<chrono::NaiveDateTime>,
    pub registration_opens_at: Option<chrono::NaiveDateTime>,
    pub registration_closes_at: Option<chrono::NaiveDateTime>,
    pub mode: String,
    pub status: String,
    pub is_free: bool,
    pub description: Option<String>,
    pub prize_text: Option<String>,
    pub championship_id: Option<Uuid>,
    pub sponsor_ids: Vec<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}
