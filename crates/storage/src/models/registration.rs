use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// A participant's enrollment in a competition. Cancelled registrations are
/// excluded from every count and revenue figure.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub competition_id: Uuid,
    pub participant_id: Uuid,
    pub distance_id: Option<Uuid>,
    pub lot_id: Option<Uuid>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
