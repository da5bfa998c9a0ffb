use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod auth;
mod barcode;
mod config;
mod error;
mod models;
mod pricing;
mod repositories;
mod routes;
mod state;
mod validation;

use common::cache::{Cache, RedisConfig};
use common::database::{self, DatabaseConfig};

use crate::auth::JwtVerifier;
use crate::config::ServerConfig;
use crate::repositories::{
    BookingRepository, EquipmentRepository, NotificationRepository, RoomRepository,
    StudioRepository, UserRepository,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting studio-reserve API service");

    // Initialize database connection pool and apply migrations
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;
    sqlx::migrate!().run(&pool).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Cache for the studio directory
    let redis_config = RedisConfig::from_env()?;
    let cache = Cache::new(&redis_config)?;

    // Verifier for identity-provider tokens
    let jwt = JwtVerifier::from_env()?;

    info!("API service initialized successfully");

    // Initialize repositories
    let app_state = AppState {
        cache,
        jwt,
        users: UserRepository::new(pool.clone()),
        studios: StudioRepository::new(pool.clone()),
        rooms: RoomRepository::new(pool.clone()),
        equipment: EquipmentRepository::new(pool.clone()),
        bookings: BookingRepository::new(pool.clone()),
        notifications: NotificationRepository::new(pool),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let server_config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr()).await?;
    info!("API service listening on {}", server_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
