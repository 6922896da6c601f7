mod config;
mod error;
mod handlers;
mod router;
mod state;

use movie_catalog_service::sea_orm::Database;
use movie_catalog_service::{ensure_dev_seed, schema};
use omdb::OmdbClient;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

pub use config::{Config, ConfigError};
pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;

const DEFAULT_LOG_FILTER: &str = "info,sea_orm=info";

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let conn = Database::connect(config.database_url.as_str()).await?;
    schema::create_tables(&conn).await?;

    if config.seed_dev_data {
        ensure_dev_seed(&conn).await?;
    }

    let server_url = config.server_url();
    let state = AppState::new(conn, OmdbClient::new(), config);
    let app = create_router(state);

    let listener = TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        println!("Error: {err}");
    }
}
