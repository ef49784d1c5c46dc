use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const RUN_IN_PROGRESS: &str = "in_progress";
pub const RUN_FINISHED: &str = "finished";
pub const RUN_ABANDONED: &str = "abandoned";

/// One recorded performance submission by a participant. Only finished runs
/// participate in the ranking; every run counts as an attempt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Run {
    pub run_id: Uuid,
    pub participant_id: Uuid,
    pub competition_id: Uuid,
    pub distance_m: i32,
    pub avg_pace_s: i32,
    pub total_time_s: i32,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
