use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Display-domain filters accepted by the competitions listing. Each value
/// is translated to a storage predicate by the pure mappers below, so query
/// construction stays testable without a live store.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CompetitionListFilter {
    /// Display status, e.g. "Aberta".
    pub status: Option<String>,
    /// "Indoor" or "Outdoor".
    pub mode: Option<String>,
    /// "Gratuita" or "Paga".
    pub pricing: Option<String>,
    /// Restricts to competitions starting within the period ending now.
    pub period: Option<Period>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
pub enum Period {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl Period {
    pub fn days(self) -> i64 {
        match self {
            Period::Last7Days => 7,
            Period::Last30Days => 30,
            Period::Last90Days => 90,
        }
    }
}

/// Absolute lower bound for a relative period. The caller supplies `now`, so
/// the mapping stays a pure function.
pub fn period_cutoff(period: Period, now: NaiveDateTime) -> NaiveDateTime {
    now - Duration::days(period.days())
}

/// Display registration status back to its storage value. Values outside
/// the fixed vocabulary pass through verbatim, mirroring the forward mapper.
pub fn registration_status_predicate(display: &str) -> &str {
    match display {
        "Pendente" => crate::models::registration::STATUS_PENDING,
        "Confirmado" => crate::models::registration::STATUS_CONFIRMED,
        "Cancelado" => crate::models::registration::STATUS_CANCELLED,
        other => other,
    }
}

/// Display competition status back to its storage value.
pub fn competition_status_predicate(display: &str) -> &str {
    match display {
        "Rascunho" => crate::models::competition::COMPETITION_DRAFT,
        "Aberta" => crate::models::competition::COMPETITION_OPEN,
        "Fechada" => crate::models::competition::COMPETITION_CLOSED,
        "Em andamento" => crate::models::competition::COMPETITION_IN_PROGRESS,
        "Finalizada" => crate::models::competition::COMPETITION_FINISHED,
        other => other,
    }
}

pub fn mode_predicate(display: &str) -> &str {
    match display {
        "Indoor" => crate::models::competition::MODE_INDOOR,
        "Outdoor" => crate::models::competition::MODE_OUTDOOR,
        other => other,
    }
}

/// "Gratuita"/"Paga" to the is_free predicate; anything else applies no
/// pricing filter.
pub fn pricing_predicate(display: &str) -> Option<bool> {
    match display {
        "Gratuita" => Some(true),
        "Paga" => Some(false),
        _ => None,
    }
}
