use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is not set.
const FILTER_DEFAULT: &str = "warn";

/// Installs the global logger.
///
/// Diagnostics go to standard error; standard output carries only the
/// conversation with the user.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(FILTER_DEFAULT));

    tracing_subscriber::registry()
    .with(filter)
    .with(
        tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
    )
    .init();
}
