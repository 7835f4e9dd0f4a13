use std::sync::Arc;

use anyhow::Context;
use storage::{
    Database,
    repository::{session::PgSessionStore, snapshot::PgDataSource},
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use features::{carts, players, refresh, scores, sessions, summary};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        players::handlers::list_players,
        players::handlers::get_top_player,
        players::handlers::compare_players,
        players::handlers::get_player,
        scores::handlers::list_recent_scores,
        summary::handlers::get_summary,
        refresh::handlers::refresh_snapshot,
        carts::handlers::create_cart,
        carts::handlers::get_cart,
        carts::handlers::delete_cart,
        carts::handlers::add_player,
        carts::handlers::remove_player,
        carts::handlers::update_notes,
        carts::handlers::rename_cart,
        carts::handlers::set_visibility,
        carts::handlers::clear_cart,
        carts::handlers::get_stats,
        carts::handlers::export_cart,
        carts::handlers::save_session,
        sessions::handlers::list_sessions,
    ),
    components(
        schemas(
            storage::dto::common::PaginationMeta,
            storage::dto::player::PlayerWithAggregates,
            storage::dto::player::PlayerSort,
            storage::dto::player::PlayerComparison,
            storage::dto::player::PlayerProfile,
            storage::dto::score::RecentScoreEntry,
            storage::dto::summary::SessionSummary,
            storage::dto::summary::LeaderboardRow,
            storage::dto::snapshot::SnapshotInfo,
            storage::dto::cart::CreateCartResponse,
            storage::dto::cart::AddToCartRequest,
            storage::dto::cart::UpdateNotesRequest,
            storage::dto::cart::RenameCartRequest,
            storage::dto::cart::VisibilityRequest,
            storage::dto::cart::CartView,
            storage::dto::cart::CartMutationResponse,
            storage::dto::cart::SaveSessionResponse,
            storage::cart::CartEntry,
            storage::cart::CartStats,
            storage::cart::AverageMetrics,
            storage::models::Player,
            storage::models::Position,
            storage::models::Play,
            storage::models::Score,
            storage::models::CartSession,
            storage::models::SessionPlayer,
        )
    ),
    tags(
        (name = "players", description = "Ranked players and comparisons"),
        (name = "scores", description = "Score feed"),
        (name = "summary", description = "Session totals and leaderboard"),
        (name = "refresh", description = "Reload data from the data source"),
        (name = "carts", description = "Scouting carts"),
        (name = "sessions", description = "Saved cart sessions"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting scouting API");

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

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(
        Arc::new(PgDataSource::new(db.pool().clone())),
        Arc::new(PgSessionStore::new(db.pool().clone())),
        config.recent_scores_limit,
    );

    if let Err(e) = state.refresh().await {
        tracing::warn!("Initial data load failed, serving errors until refresh: {}", e);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = features::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
