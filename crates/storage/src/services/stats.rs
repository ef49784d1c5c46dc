use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::dto::competition::CompetitionStats;
use crate::models::registration::{STATUS_CANCELLED, STATUS_CONFIRMED};
use crate::models::{Lot, Registration};

/// Attendance and revenue snapshot over already-fetched registration and lot
/// sets. Pure and recomputed per call; competition registration sets are
/// small, bounded, administrative-facing data.
///
/// Revenue sums the lot's current price for confirmed registrations that
/// resolve to a lot. Cancelled registrations are excluded from every figure.
pub fn registration_stats(
    registrations: &[Registration],
    lots: &HashMap<Uuid, Lot>,
) -> CompetitionStats {
    let mut athletes: HashSet<Uuid> = HashSet::new();
    let mut total_registrations = 0i64;
    let mut total_revenue_cents = 0i64;

    for registration in registrations {
        if registration.status == STATUS_CANCELLED {
            continue;
        }

        total_registrations += 1;
        athletes.insert(registration.participant_id);

        if registration.status == STATUS_CONFIRMED
            && let Some(lot) = registration.lot_id.and_then(|id| lots.get(&id))
        {
            total_revenue_cents += lot.price_cents;
        }
    }

    CompetitionStats {
        total_athletes: athletes.len() as i64,
        total_registrations,
        total_revenue_cents,
    }
}
