//! Control channel: line-oriented commands from the parent over stdin.
//!
//! The parent owns this process's lifetime. It can request shutdown with an
//! explicit command, and closing its end of the pipe must also stop us: a
//! loop that keeps reading a dead pipe would leave the process (and port
//! 8008) alive after the parent is gone.

use std::io::BufRead;

use tokio::sync::oneshot;

/// The one recognized control command. Case-sensitive.
pub const SHUTDOWN_COMMAND: &str = "sidecar shutdown";

/// Why the control loop decided the process should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
  /// The parent sent the shutdown command.
  Command,
  /// The parent closed its end of the pipe (EOF or read error on stdin).
  StreamClosed,
}

/// One parsed control line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
  Shutdown,
  Empty,
  Unknown(&'a str),
}

/// Parse a raw control line. Surrounding whitespace is trimmed first.
pub fn parse_command(line: &str) -> Command<'_> {
  let trimmed = line.trim();
  if trimmed.is_empty() {
    Command::Empty
  } else if trimmed == SHUTDOWN_COMMAND {
    Command::Shutdown
  } else {
    Command::Unknown(trimmed)
  }
}

/// Drive the command loop over any line-oriented reader. Returns as soon as
/// a shutdown trigger fires; unknown commands and blank lines keep looping.
pub fn run_loop<R: BufRead>(input: R) -> ShutdownReason {
  for line in input.lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        // A failing read is indistinguishable from a dead parent.
        eprintln!("control: read error: {}", e);
        return ShutdownReason::StreamClosed;
      }
    };

    match parse_command(&line) {
      Command::Shutdown => return ShutdownReason::Command,
      Command::Unknown(cmd) => println!("control: unknown command: {}", cmd),
      Command::Empty => {}
    }
  }

  // EOF: the parent closed the pipe. Exiting here is what keeps the process
  // from lingering after the parent dies without sending a command.
  ShutdownReason::StreamClosed
}

/// Run the control loop on a dedicated blocking thread (stdin reads block)
/// and report the outcome once over the channel.
pub async fn listen(shutdown: oneshot::Sender<ShutdownReason>) {
  println!("control: listening for parent commands");

  let reason = tokio::task::spawn_blocking(|| run_loop(std::io::stdin().lock()))
    .await
    .unwrap_or(ShutdownReason::StreamClosed);

  let _ = shutdown.send(reason);
}

/// Terminate the whole process immediately, status 0. In-flight HTTP work is
/// not drained and destructors do not run; the parent expects the port to
/// free up right away.
pub fn exit_now() -> ! {
  println!("control: shutting down");
  std::process::exit(0);
}
