use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{export_registrations, list_registrations};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:id/registrations", get(list_registrations))
        .route("/:id/registrations/export", get(export_registrations))
}
