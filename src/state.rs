use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}
