//! Registration listing pipeline: fetch the raw page, batch-resolve the
//! referenced profiles, distances and lots, then join everything into
//! display rows. The paginated view and the CSV export share the same fetch
//! and join path so they can never disagree on rows or order.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::{PageBounds, PaginationParams};
use crate::dto::registration::{DistanceInfo, LotInfo, RegistrationRow};
use crate::error::Result;
use crate::models::{Distance, Lot, Profile, Registration};
use crate::repository::reference::ReferenceResolver;
use crate::repository::registration::RegistrationRepository;
use crate::repository::run::RunRepository;
use crate::services::format;

/// One page of registration rows plus the total count of non-cancelled
/// registrations, computed independently of the page window.
pub async fn list_page(
    pool: &PgPool,
    competition_id: Uuid,
    params: &PaginationParams,
) -> Result<(Vec<RegistrationRow>, i64)> {
    let repository = RegistrationRepository::new(pool);

    let (total, rows) = tokio::try_join!(
        repository.count_active(competition_id),
        load_rows(pool, competition_id, Some(params.bounds())),
    )?;

    Ok((rows, total))
}

/// The full registration set in listing order, for export.
pub async fn list_all(pool: &PgPool, competition_id: Uuid) -> Result<Vec<RegistrationRow>> {
    load_rows(pool, competition_id, None).await
}

async fn load_rows(
    pool: &PgPool,
    competition_id: Uuid,
    window: Option<PageBounds>,
) -> Result<Vec<RegistrationRow>> {
    let registrations = RegistrationRepository::new(pool)
        .list_for_competition(competition_id, window)
        .await?;

    if registrations.is_empty() {
        return Ok(Vec::new());
    }

    let participant_ids = collect_ids(registrations.iter().map(|r| Some(r.participant_id)));
    let distance_ids = collect_ids(registrations.iter().map(|r| r.distance_id));
    let lot_ids = collect_ids(registrations.iter().map(|r| r.lot_id));

    let resolver = ReferenceResolver::new(pool);
    let runs = RunRepository::new(pool);

    let (profiles, distances, lots, attempts) = tokio::try_join!(
        resolver.profiles_by_ids(&participant_ids),
        resolver.distances_by_ids(&distance_ids),
        resolver.lots_by_ids(&lot_ids),
        runs.attempt_counts(competition_id, &participant_ids),
    )?;

    Ok(join_rows(
        registrations,
        &profiles,
        &distances,
        &lots,
        &attempts,
    ))
}

fn collect_ids(ids: impl Iterator<Item = Option<Uuid>>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.flatten().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Joins raw registrations with the resolved reference maps. Pure, so the
/// projection is testable without a store; a missing profile falls back to
/// the sentinel name, a missing distance or lot to an absent field.
pub fn join_rows(
    registrations: Vec<Registration>,
    profiles: &HashMap<Uuid, Profile>,
    distances: &HashMap<Uuid, Distance>,
    lots: &HashMap<Uuid, Lot>,
    attempts: &HashMap<Uuid, i64>,
) -> Vec<RegistrationRow> {
    registrations
        .into_iter()
        .map(|registration| {
            let profile = profiles.get(&registration.participant_id);

            RegistrationRow {
                registration_id: registration.registration_id,
                participant_id: registration.participant_id,
                participant_name: profile
                    .map(|p| p.display_name.clone())
                    .unwrap_or_else(|| format::UNKNOWN_PARTICIPANT.to_string()),
                avatar_url: profile.and_then(|p| p.avatar_url.clone()),
                distance: registration
                    .distance_id
                    .and_then(|id| distances.get(&id))
                    .map(|d| DistanceInfo {
                        distance_id: d.distance_id,
                        label: d.label.clone(),
                        meters: d.meters,
                    }),
                lot: registration
                    .lot_id
                    .and_then(|id| lots.get(&id))
                    .map(|l| LotInfo {
                        lot_id: l.lot_id,
                        name: l.name.clone(),
                        price_cents: l.price_cents,
                        currency: l.currency.clone(),
                    }),
                attempts: attempts
                    .get(&registration.participant_id)
                    .copied()
                    .unwrap_or(0),
                status: format::display_registration_status(&registration.status).to_string(),
                registered_at: registration.created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::registration::{STATUS_CONFIRMED, STATUS_PENDING};

    fn registration(
        participant_id: Uuid,
        distance_id: Option<Uuid>,
        lot_id: Option<Uuid>,
        status: &str,
    ) -> Registration {
        Registration {
            registration_id: Uuid::new_v4(),
            competition_id: Uuid::new_v4(),
            participant_id,
            distance_id,
            lot_id,
            status: status.to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 2, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        }
    }

    fn profile(profile_id: Uuid, name: &str) -> Profile {
        Profile {
            profile_id,
            display_name: name.to_string(),
            avatar_url: Some("https://cdn.example/avatar.png".to_string()),
        }
    }

    #[test]
    fn joins_resolved_references() {
        let participant = Uuid::new_v4();
        let distance_id = Uuid::new_v4();
        let lot_id = Uuid::new_v4();

        let profiles = HashMap::from([(participant, profile(participant, "Ana Souza"))]);
        let distances = HashMap::from([(
            distance_id,
            Distance {
                distance_id,
                competition_id: Uuid::new_v4(),
                label: "10K".to_string(),
                meters: 10_000,
                sort_order: 1,
            },
        )]);
        let lots = HashMap::from([(
            lot_id,
            Lot {
                lot_id,
                competition_id: Uuid::new_v4(),
                name: "Lote promocional".to_string(),
                description: None,
                price_cents: 8900,
                currency: "BRL".to_string(),
                allows_subscription: true,
                is_active: true,
                sort_order: 0,
            },
        )]);
        let attempts = HashMap::from([(participant, 3i64)]);

        let rows = join_rows(
            vec![registration(
                participant,
                Some(distance_id),
                Some(lot_id),
                STATUS_CONFIRMED,
            )],
            &profiles,
            &distances,
            &lots,
            &attempts,
        );

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.participant_name, "Ana Souza");
        assert_eq!(row.distance.as_ref().unwrap().meters, 10_000);
        assert_eq!(row.lot.as_ref().unwrap().price_cents, 8900);
        assert_eq!(row.attempts, 3);
        assert_eq!(row.status, "Confirmado");
    }

    #[test]
    fn missing_profile_falls_back_to_sentinel() {
        let rows = join_rows(
            vec![registration(Uuid::new_v4(), None, None, STATUS_PENDING)],
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
        );

        assert_eq!(rows[0].participant_name, format::UNKNOWN_PARTICIPANT);
        assert_eq!(rows[0].avatar_url, None);
        assert!(rows[0].distance.is_none());
        assert!(rows[0].lot.is_none());
        assert_eq!(rows[0].attempts, 0);
        assert_eq!(rows[0].status, "Pendente");
    }

    #[test]
    fn join_preserves_input_order() {
        let first = registration(Uuid::new_v4(), None, None, STATUS_PENDING);
        let second = registration(Uuid::new_v4(), None, None, STATUS_PENDING);
        let expected: Vec<Uuid> = vec![first.registration_id, second.registration_id];

        let rows = join_rows(
            vec![first, second],
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
            &HashMap::new(),
        );

        let got: Vec<Uuid> = rows.iter().map(|r| r.registration_id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn collect_ids_dedups_and_drops_absent() {
        let shared = Uuid::new_v4();
        let ids = collect_ids(vec![Some(shared), None, Some(shared)].into_iter());
        assert_eq!(ids, vec![shared]);
    }
}
