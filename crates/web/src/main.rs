use anyhow::Context;
use axum::Router;
use storage::Database;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeySet;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition_detail,
        features::registrations::handlers::list_registrations,
        features::registrations::handlers::export_registrations,
        features::ranking::handlers::list_ranking,
        features::ranking::handlers::export_ranking,
    ),
    components(
        schemas(
            storage::models::Competition,
            storage::models::Distance,
            storage::models::Lot,
            storage::models::Document,
            storage::models::Sponsor,
            storage::models::Profile,
            storage::dto::competition::CompetitionDetailResponse,
            storage::dto::competition::CompetitionStats,
            storage::dto::registration::RegistrationRow,
            storage::dto::registration::DistanceInfo,
            storage::dto::registration::LotInfo,
            storage::dto::ranking::RankingRow,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PageWindow,
        )
    ),
    tags(
        (name = "competitions", description = "Competition listing and detail"),
        (name = "registrations", description = "Registration listing and CSV export"),
        (name = "ranking", description = "Finishers ranking and CSV export"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting competition admin API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed");

    let api_keys = ApiKeySet::parse(&config.api_keys);

    let competitions = features::competitions::routes()
        .merge(features::registrations::routes())
        .merge(features::ranking::routes());

    let api = Router::new()
        .nest("/competitions", competitions)
        .layer(axum::middleware::from_fn_with_state(
            api_keys,
            middleware::auth::require_api_key,
        ));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
