use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the finishers ranking. `position` is 1-based and dense,
/// continuous across pages: page 2 with page size 10 starts at 11.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankingRow {
    pub position: i64,
    pub participant_id: Uuid,
    pub participant_name: String,
    pub avatar_url: Option<String>,
    pub distance_m: i32,
    pub avg_pace_s: i32,
    pub total_time_s: i32,
}
