use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A priced registration tier for a competition (e.g. "early bird", "with kit").
///
/// Prices are integer minor-currency units. Revenue figures use the lot's
/// current price, not the price at registration time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lot {
    pub lot_id: Uuid,
    pub competition_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub allows_subscription: bool,
    pub is_active: bool,
    pub sort_order: i32,
}
