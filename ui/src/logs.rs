//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,ui=debug,dashboard_core=debug";

/// Route `tracing` to the console. `LOG_FILTER` at build time overrides
/// the default directives. Calling this twice is harmless.
pub fn init_logging() {
    let directives = option_env!("LOG_FILTER").unwrap_or(DEFAULT_FILTER);
    let filter = EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Browsers have no std::time and render ANSI colours inconsistently.
    let console = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(false)
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    match tracing_subscriber::registry().with(filter).with(console).try_init() {
        Ok(()) => tracing::debug!(directives, "console logging ready"),
        Err(_) => tracing::trace!("console logging already installed"),
    }
}
