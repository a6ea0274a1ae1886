//! Request/response types for the sidecar API.

use serde::{Deserialize, Serialize};

/// Body of POST /optimize: a relative folder name, e.g. "Downloads".
#[derive(Deserialize)]
pub struct OptimizeRequest {
  pub folder: String,
}

#[derive(Serialize)]
pub struct OptimizeResponse {
  pub message: String,
}
