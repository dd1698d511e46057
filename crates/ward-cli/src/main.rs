//! `ward` — interactive console session for the Ward hospital system.
//!
//! # Usage
//!
//! ```
//! ward
//! ward --days 14 --filter ward=debug
//! ```

mod format;
mod prompt;
mod session;

use anyhow::Result;
use clap::Parser;
use session::Hospital;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "ward", about = "Interactive console for the Ward hospital system")]
struct Args {
  /// Number of days offered in the booking window, starting today.
  #[arg(long, default_value_t = 7)]
  days: u32,

  /// Tracing filter, e.g. `ward=debug`. Overrides RUST_LOG.
  #[arg(long)]
  filter: Option<String>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  let filter = match &args.filter {
    Some(f) => EnvFilter::new(f),
    None => EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("info")),
  };
  // Menus own stdout; logs go to stderr.
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  let mut hospital = Hospital::new(args.days)?;
  hospital.run()
}
