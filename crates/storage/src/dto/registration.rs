use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One display row of the registration listing: the raw registration joined
/// with its resolved profile, distance, lot and attempt count. Built per
/// query, never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationRow {
    pub registration_id: Uuid,
    pub participant_id: Uuid,
    pub participant_name: String,
    pub avatar_url: Option<String>,
    pub distance: Option<DistanceInfo>,
    pub lot: Option<LotInfo>,
    pub attempts: i64,
    pub status: String,
    pub registered_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DistanceInfo {
    pub distance_id: Uuid,
    pub label: String,
    pub meters: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LotInfo {
    pub lot_id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub currency: String,
}
