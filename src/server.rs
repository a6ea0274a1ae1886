//! Router assembly.

use axum::{routing::post, Router};
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Build the application router.
///
/// CORS mirrors the request origin with credentials allowed (a wildcard
/// origin is rejected by browsers when credentials are on), so any local
/// frontend can call the endpoint during development.
pub fn router() -> Router {
  Router::new()
    .route("/optimize", post(handlers::optimize))
    .layer(CorsLayer::very_permissive())
}
