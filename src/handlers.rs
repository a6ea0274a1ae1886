//! HTTP handlers for the sidecar API.

use axum::Json;

use crate::types::{OptimizeRequest, OptimizeResponse};

/// Acknowledge an optimization request. The optimization itself is not
/// implemented; the endpoint logs the folder and answers immediately.
pub async fn optimize(Json(payload): Json<OptimizeRequest>) -> Json<OptimizeResponse> {
  println!("optimize: received request for {}", payload.folder);

  // "requestessd" is intentional: shipped frontends display this string
  // verbatim and tests pin it, so it must stay byte-identical.
  Json(OptimizeResponse {
    message: format!("Optimization requestessd for {}", payload.folder),
  })
}
