use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Competition, Distance, Document, Lot, Sponsor};

/// Point-in-time attendance and revenue snapshot for one competition,
/// recomputed from current state on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CompetitionStats {
    pub total_athletes: i64,
    pub total_registrations: i64,
    pub total_revenue_cents: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompetitionDetailResponse {
    pub competition: Competition,
    pub distances: Vec<Distance>,
    pub lots: Vec<Lot>,
    pub documents: Vec<Document>,
    pub sponsors: Vec<Sponsor>,
    pub stats: CompetitionStats,
}
