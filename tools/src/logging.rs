//! Logging setup for the command line tools.
//!
//! Events go to stderr so stdout stays clean for encoded or decoded output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `directives` when set.
pub fn setup_logging(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(main_layer)
        .init();
}
