// src/logging.rs
// Diagnostic logging to stderr. User-facing messages stay on println!.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// RUST_LOG wins if set; otherwise "warn", or "debug" for our crate with -v
pub fn init(verbose: bool) {
    let default = if verbose { "warn,repo_clip=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
