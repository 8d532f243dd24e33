use tracing_subscriber::filter;
use tracing_subscriber::prelude::*;

/// Logs go to stderr without ANSI colors so stdout stays free for `--json`.
pub fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let default_filter = filter::Targets::new().with_default(level);
    let log_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(default_filter);
    tracing_subscriber::registry().with(log_layer).init();
}
