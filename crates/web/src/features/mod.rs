pub mod competitions;
pub mod ranking;
pub mod registrations;

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

/// CSV bytes as a download attachment. The body already carries the UTF-8
/// byte-order mark.
pub(crate) fn csv_attachment(filename: &str, bytes: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename=\"{filename}\"");

    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_str(&disposition)
                    .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
            ),
        ],
        bytes,
    )
        .into_response()
}
