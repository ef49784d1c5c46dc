//! CSV export of the registration listing and the finishers ranking. Each
//! export re-runs the unpaginated form of the matching aggregator, so the
//! file always agrees with the concatenation of the UI pages.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::ranking::RankingRow;
use crate::dto::registration::RegistrationRow;
use crate::error::{Result, StorageError};
use crate::services::format;
use crate::services::{ranking, registrations};

/// Byte-order mark so spreadsheet applications decode the file as UTF-8.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const REGISTRATION_HEADERS: [&str; 7] = [
    "Atleta",
    "Distância",
    "Lote",
    "Valor",
    "Corridas",
    "Status",
    "Inscrito em",
];

const RANKING_HEADERS: [&str; 5] = [
    "Posição",
    "Atleta",
    "Distância",
    "Ritmo médio",
    "Tempo total",
];

pub async fn registrations_csv(pool: &PgPool, competition_id: Uuid) -> Result<Vec<u8>> {
    let rows = registrations::list_all(pool, competition_id).await?;
    let records: Vec<Vec<String>> = rows.iter().map(registration_record).collect();

    write_csv(&REGISTRATION_HEADERS, &records)
}

pub async fn ranking_csv(pool: &PgPool, competition_id: Uuid) -> Result<Vec<u8>> {
    let rows = ranking::list_all(pool, competition_id).await?;
    let records: Vec<Vec<String>> = rows.iter().map(ranking_record).collect();

    write_csv(&RANKING_HEADERS, &records)
}

fn registration_record(row: &RegistrationRow) -> Vec<String> {
    vec![
        row.participant_name.clone(),
        format::or_placeholder(
            row.distance
                .as_ref()
                .map(|d| format::format_distance(d.meters)),
        ),
        format::or_placeholder(row.lot.as_ref().map(|l| l.name.clone())),
        format::or_placeholder(
            row.lot
                .as_ref()
                .map(|l| format::format_price(l.price_cents, &l.currency)),
        ),
        row.attempts.to_string(),
        row.status.clone(),
        format::format_datetime(row.registered_at),
    ]
}

fn ranking_record(row: &RankingRow) -> Vec<String> {
    vec![
        row.position.to_string(),
        row.participant_name.clone(),
        format::format_distance(row.distance_m),
        format::format_pace(row.avg_pace_s),
        format::format_duration(row.total_time_s),
    ]
}

/// Serializes header and data rows as BOM-prefixed, RFC-4180-quoted CSV.
/// Zero data rows is a distinct condition: the caller gets `EmptyExport`
/// instead of a silently header-only file.
pub fn write_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>> {
    if rows.is_empty() {
        return Err(StorageError::EmptyExport);
    }

    let mut buffer = Vec::with_capacity(UTF8_BOM.len() + rows.len() * 64);
    buffer.extend_from_slice(UTF8_BOM);

    let mut writer = csv::Writer::from_writer(buffer);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    writer.into_inner().map_err(|e| {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, e.error().to_string());
        StorageError::Csv(csv::Error::from(io_error))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_starts_with_bom_and_header() {
        let bytes = write_csv(&["a", "b"], &[vec!["1".to_string(), "2".to_string()]]).unwrap();

        assert_eq!(&bytes[..3], UTF8_BOM);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "a,b\n1,2\n");
    }

    #[test]
    fn cells_with_quotes_and_delimiters_are_escaped() {
        let bytes = write_csv(
            &["frase"],
            &[vec![r#"He said "hi", ok"#.to_string()]],
        )
        .unwrap();

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "frase\n\"He said \"\"hi\"\", ok\"\n");
    }

    #[test]
    fn line_breaks_inside_cells_are_quoted() {
        let bytes = write_csv(&["obs"], &[vec!["linha 1\nlinha 2".to_string()]]).unwrap();

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "obs\n\"linha 1\nlinha 2\"\n");
    }

    #[test]
    fn empty_row_set_is_a_distinct_condition() {
        let result = write_csv(&["a"], &[]);
        assert!(matches!(result, Err(StorageError::EmptyExport)));
    }

    #[test]
    fn ranking_record_uses_display_formats() {
        let record = ranking_record(&RankingRow {
            position: 11,
            participant_id: uuid::Uuid::new_v4(),
            participant_name: "Carla Dias".to_string(),
            avatar_url: None,
            distance_m: 21_097,
            avg_pace_s: 325,
            total_time_s: 6_858,
        });

        assert_eq!(
            record,
            vec!["11", "Carla Dias", "21,09km", "05:25/km", "01:54:18"]
        );
    }

    #[test]
    fn registration_record_placeholders_absent_references() {
        use chrono::NaiveDate;

        let record = registration_record(&RegistrationRow {
            registration_id: uuid::Uuid::new_v4(),
            participant_id: uuid::Uuid::new_v4(),
            participant_name: format::UNKNOWN_PARTICIPANT.to_string(),
            avatar_url: None,
            distance: None,
            lot: None,
            attempts: 0,
            status: "Pendente".to_string(),
            registered_at: NaiveDate::from_ymd_opt(2026, 2, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        });

        assert_eq!(
            record,
            vec![
                format::UNKNOWN_PARTICIPANT,
                "-",
                "-",
                "-",
                "0",
                "Pendente",
                "01/02/2026 08:30"
            ]
        );
    }
}
