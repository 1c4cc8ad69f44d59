use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber: fmt layer on stderr, filtered by `filter`
/// (a `RUST_LOG`-style directive). Falls back to `info` on a bad directive.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
    info!("logging initialized");
}
