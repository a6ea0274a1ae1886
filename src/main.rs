//! Binary entrypoint for the optimizer sidecar.
//!
//! Two tasks share the process: the HTTP service (main task) and the stdin
//! control loop (blocking thread). Shutdown is a hard exit, so the parent
//! never waits on in-flight requests.

use std::future::IntoFuture;

use tokio::sync::oneshot;

use optimizer_sidecar::control::{self, ShutdownReason};
use optimizer_sidecar::{router, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::default();

  let (shutdown_tx, shutdown_rx) = oneshot::channel();
  tokio::spawn(control::listen(shutdown_tx));

  let addr = config.addr();
  let listener = tokio::net::TcpListener::bind(addr).await?;
  println!("optimizer-sidecar listening on http://{}", addr);

  tokio::select! {
    result = axum::serve(listener, router()).into_future() => result?,
    reason = shutdown_rx => {
      match reason.unwrap_or(ShutdownReason::StreamClosed) {
        ShutdownReason::Command => println!("control: shutdown requested by parent"),
        ShutdownReason::StreamClosed => println!("control: input stream closed, parent is gone"),
      }
      control::exit_now();
    }
    _ = tokio::signal::ctrl_c() => {
      println!("control: interrupt received");
      control::exit_now();
    }
  }

  Ok(())
}
