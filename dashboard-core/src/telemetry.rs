//! Logging to stderr for native runs and tests.

use tracing::Subscriber;
use tracing::subscriber::{SetGlobalDefaultError, set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// `RUST_LOG` wins over `env_filter` when set.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .pretty()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default, returning an error if one is
/// already installed.
pub fn try_init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> Result<(), SetGlobalDefaultError> {
    // Another subscriber may already have claimed the log bridge.
    let _ = LogTracer::init();
    set_global_default(subscriber)
}
