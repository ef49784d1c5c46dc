use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_competition_detail, list_competitions};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_competitions))
        .route("/:id", get(get_competition_detail))
}
