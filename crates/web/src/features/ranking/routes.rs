use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{export_ranking, list_ranking};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:id/ranking", get(list_ranking))
        .route("/:id/ranking/export", get(export_ranking))
}
