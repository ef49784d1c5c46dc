//! Finishers ranking: finished runs ordered by distance descending then
//! average pace ascending, with dense 1-based positions that stay
//! continuous across pages. The export form runs the same path without a
//! window, positioning over the whole set.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::ranking::RankingRow;
use crate::error::Result;
use crate::models::{Profile, Run};
use crate::repository::reference::ReferenceResolver;
use crate::repository::run::RunRepository;
use crate::services::format;

pub async fn list_page(
    pool: &PgPool,
    competition_id: Uuid,
    params: &PaginationParams,
) -> Result<(Vec<RankingRow>, i64)> {
    let repository = RunRepository::new(pool);
    let bounds = params.bounds();

    let (total, runs) = tokio::try_join!(
        repository.count_finished(competition_id),
        repository.finished_for_competition(competition_id, Some(bounds)),
    )?;

    let rows = resolve_rows(pool, runs, bounds.offset).await?;

    Ok((rows, total))
}

pub async fn list_all(pool: &PgPool, competition_id: Uuid) -> Result<Vec<RankingRow>> {
    let runs = RunRepository::new(pool)
        .finished_for_competition(competition_id, None)
        .await?;

    resolve_rows(pool, runs, 0).await
}

async fn resolve_rows(pool: &PgPool, runs: Vec<Run>, offset: i64) -> Result<Vec<RankingRow>> {
    if runs.is_empty() {
        return Ok(Vec::new());
    }

    let mut participant_ids: Vec<Uuid> = runs.iter().map(|r| r.participant_id).collect();
    participant_ids.sort_unstable();
    participant_ids.dedup();

    let profiles = ReferenceResolver::new(pool)
        .profiles_by_ids(&participant_ids)
        .await?;

    Ok(assemble(runs, offset, &profiles))
}

/// Assigns positions and joins participant identity. `offset` is the number
/// of rows on earlier pages, so position = offset + index + 1.
pub fn assemble(runs: Vec<Run>, offset: i64, profiles: &HashMap<Uuid, Profile>) -> Vec<RankingRow> {
    runs.into_iter()
        .enumerate()
        .map(|(index, run)| {
            let profile = profiles.get(&run.participant_id);

            RankingRow {
                position: offset + index as i64 + 1,
                participant_id: run.participant_id,
                participant_name: profile
                    .map(|p| p.display_name.clone())
                    .unwrap_or_else(|| format::UNKNOWN_PARTICIPANT.to_string()),
                avatar_url: profile.and_then(|p| p.avatar_url.clone()),
                distance_m: run.distance_m,
                avg_pace_s: run.avg_pace_s,
                total_time_s: run.total_time_s,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::run::RUN_FINISHED;

    fn run(distance_m: i32, avg_pace_s: i32) -> Run {
        Run {
            run_id: Uuid::new_v4(),
            participant_id: Uuid::new_v4(),
            competition_id: Uuid::new_v4(),
            distance_m,
            avg_pace_s,
            total_time_s: distance_m / 1000 * avg_pace_s,
            status: RUN_FINISHED.to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 2, 15)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
        }
    }

    /// Mirror of the repository's ORDER BY, for exercising the tie-break
    /// rule over in-memory rows.
    fn ranking_order(runs: &mut [Run]) {
        runs.sort_by(|a, b| {
            b.distance_m
                .cmp(&a.distance_m)
                .then(a.avg_pace_s.cmp(&b.avg_pace_s))
                .then(a.run_id.cmp(&b.run_id))
        });
    }

    #[test]
    fn longer_distance_ranks_before_faster_pace() {
        let mut runs = vec![run(5_000, 240), run(10_000, 360)];
        ranking_order(&mut runs);
        let rows = assemble(runs, 0, &HashMap::new());

        assert_eq!(rows[0].distance_m, 10_000);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].distance_m, 5_000);
        assert_eq!(rows[1].position, 2);
    }

    #[test]
    fn equal_distance_breaks_tie_on_pace() {
        let mut runs = vec![run(10_000, 400), run(10_000, 350)];
        ranking_order(&mut runs);
        let rows = assemble(runs, 0, &HashMap::new());

        assert_eq!(rows[0].avg_pace_s, 350);
        assert_eq!(rows[1].avg_pace_s, 400);
    }

    #[test]
    fn positions_continue_across_pages() {
        let runs: Vec<Run> = (0..10).map(|i| run(10_000 - i * 100, 300)).collect();
        let rows = assemble(runs, 10, &HashMap::new());

        let positions: Vec<i64> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, (11..=20).collect::<Vec<i64>>());
    }

    #[test]
    fn unresolved_profile_gets_sentinel_name() {
        let rows = assemble(vec![run(5_000, 300)], 0, &HashMap::new());
        assert_eq!(rows[0].participant_name, format::UNKNOWN_PARTICIPANT);
    }

    #[test]
    fn resolved_profile_supplies_identity() {
        let mut one = run(5_000, 300);
        let participant = Uuid::new_v4();
        one.participant_id = participant;

        let profiles = HashMap::from([(
            participant,
            Profile {
                profile_id: participant,
                display_name: "Bruno Lima".to_string(),
                avatar_url: None,
            },
        )]);

        let rows = assemble(vec![one], 0, &profiles);
        assert_eq!(rows[0].participant_name, "Bruno Lima");
    }
}
