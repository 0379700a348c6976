//! Backend entry-point: wires the REST endpoints to the PostgreSQL store.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotels_backend::domain::validation::PhoneValidation;
use hotels_backend::inbound::http::health::HealthState;
use hotels_backend::outbound::persistence::{DbPool, PoolConfig};

use server::{ServerConfig, create_server};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Assemble the store URL from the environment.
///
/// `DB_NAME` and `DB_USER` are required; host and port fall back to a
/// local default and `DB_PASS` to empty.
fn database_url_from_env() -> std::io::Result<String> {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_owned());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_owned());
    let name = env::var("DB_NAME").map_err(|_| std::io::Error::other("DB_NAME is not set"))?;
    let user = env::var("DB_USER").map_err(|_| std::io::Error::other("DB_USER is not set"))?;
    let pass = env::var("DB_PASS").unwrap_or_default();
    Ok(format!("postgres://{user}:{pass}@{host}:{port}/{name}"))
}

/// Apply pending migrations over a synchronous connection before the
/// async pool spins up.
fn run_migrations(database_url: &str) -> std::io::Result<()> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|e| std::io::Error::other(format!("failed to connect for migrations: {e}")))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(format!("failed to run migrations: {e}")))?;
    for migration in applied {
        info!(%migration, "migration applied");
    }
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = database_url_from_env()?;
    run_migrations(&database_url)?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("failed to build store pool: {e}")))?;

    // The port is part of the API contract; clients hard-code it.
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool, PhoneValidation::from_env());

    info!(%bind_addr, "starting hotels backend");
    let server = create_server(health_state, config)?;
    server.await
}
