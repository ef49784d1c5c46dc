//! Storage-to-display mapping: status vocabulary, paces, distances, money
//! and dates. Everything here is a pure, total function; absent input maps
//! to a fixed placeholder instead of an error.

use chrono::{NaiveDate, NaiveDateTime};

pub const PLACEHOLDER: &str = "-";
pub const UNKNOWN_PARTICIPANT: &str = "Usuário desconhecido";

/// Storage registration status to the display vocabulary. Unknown statuses
/// pass through verbatim so new storage values keep rendering.
pub fn display_registration_status(status: &str) -> &str {
    match status {
        "pending" => "Pendente",
        "confirmed" => "Confirmado",
        "cancelled" => "Cancelado",
        other => other,
    }
}

pub fn display_competition_status(status: &str) -> &str {
    match status {
        "draft" => "Rascunho",
        "open" => "Aberta",
        "closed" => "Fechada",
        "in_progress" => "Em andamento",
        "finished" => "Finalizada",
        other => other,
    }
}

pub fn display_mode(mode: &str) -> &str {
    match mode {
        "indoor" => "Indoor",
        "outdoor" => "Outdoor",
        other => other,
    }
}

/// Average pace in seconds per kilometer as "mm:ss/km".
pub fn format_pace(seconds_per_km: i32) -> String {
    let seconds = seconds_per_km.max(0);
    format!("{:02}:{:02}/km", seconds / 60, seconds % 60)
}

/// Elapsed time in seconds as "hh:mm:ss".
pub fn format_duration(total_seconds: i32) -> String {
    let seconds = total_seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Meters as "X,XXkm" from one kilometer up, plain meters below that.
pub fn format_distance(meters: i32) -> String {
    let meters = meters.max(0);
    if meters >= 1000 {
        format!("{},{:02}km", meters / 1000, (meters % 1000) / 10)
    } else {
        format!("{meters}m")
    }
}

/// Integer minor-currency units as a display amount with a comma decimal
/// separator, e.g. 5000 BRL cents to "R$ 50,00".
pub fn format_price(cents: i64, currency: &str) -> String {
    let symbol = match currency {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        other => other,
    };
    let cents = cents.max(0);
    format!("{} {},{:02}", symbol, cents / 100, cents % 100)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

pub fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}
