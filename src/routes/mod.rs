pub mod auth;
pub mod candidates;
pub mod stats;
pub mod upload;
pub mod users;

use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

/// `{"success": true}` acknowledgement for mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub const OK: Ack = Ack { success: true };
}

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/candidates", get(candidates::list))
        .route("/update", post(candidates::update))
        .route("/create-user", post(users::create))
        .route("/users", get(users::list))
        .route("/upload", post(upload::upload))
        .route("/stats", get(stats::stats))
}
