use axum::{routing, Json, Router};

use crate::models::ApiHealth;

pub fn router() -> Router<()> {
    Router::new().route("/health", routing::get(health))
}

/// Liveness only; SMTP reachability is probed at startup, not per request.
async fn health() -> Json<ApiHealth> {
    Json(ApiHealth { ok: true })
}
