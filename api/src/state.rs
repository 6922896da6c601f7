use std::sync::Arc;

use movie_catalog_service::sea_orm::DatabaseConnection;
use omdb::OmdbClient;

use crate::config::Config;

/// Shared by every handler. `DatabaseConnection` is not `Clone` under
/// SeaORM's `mock` feature, so it is held in an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<DatabaseConnection>,
    pub omdb: OmdbClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, omdb: OmdbClient, config: Config) -> Self {
        Self {
            conn: Arc::new(conn),
            omdb,
            config: Arc::new(config),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.conn
    }
}
