//! Optimizer Sidecar
//!
//! Local HTTP service launched and supervised by the desktop host process.
//! Serves the /optimize acknowledgement endpoint and watches stdin so the
//! parent can stop the process. Binds to 127.0.0.1 only.

pub mod config;
pub mod control;
pub mod handlers;
pub mod server;
pub mod types;

pub use config::Config;
pub use control::ShutdownReason;
pub use server::router;
pub use types::{OptimizeRequest, OptimizeResponse};
