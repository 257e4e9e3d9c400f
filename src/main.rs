use gatherly::{
    config::{JwtConfig, ServerConfig},
    db, routes,
    repositories::{SqliteEventRepository, SqliteRsvpRepository, SqliteUserRepository},
    services::{AuthService, EventService, RsvpService, TokenService, UserService},
    AppState,
};

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatherly=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let pool = db::create_pool().await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Initialize repositories
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let event_repository = Arc::new(SqliteEventRepository::new(pool.clone()));
    let rsvp_repository = Arc::new(SqliteRsvpRepository::new(pool.clone()));

    // Initialize services
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let auth_service = Arc::new(AuthService::new(user_repository.clone()));
    let event_service = Arc::new(EventService::new(event_repository));
    let rsvp_service = Arc::new(RsvpService::new(rsvp_repository));
    let token_service = Arc::new(TokenService::new(&JwtConfig::from_env()?));

    let app_state = AppState {
        user_service,
        auth_service,
        event_service,
        rsvp_service,
        token_service,
        pool: pool.clone(),
    };

    let app = routes::build_router(app_state);

    // Start server
    let server_config = ServerConfig::from_env()?;
    let addr = SocketAddr::from((server_config.host.parse::<IpAddr>()?, server_config.port));

    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
