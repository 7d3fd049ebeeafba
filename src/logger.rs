//! Subscriber setup for the `bmp_transform_rs` binary.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "bmp_transform_rs=debug,info" } else { "info" }
}

/// True when `filter` lets debug or trace events through for some target.
fn reports_span_close(filter: &EnvFilter) -> bool {
    filter
        .max_level_hint()
        .is_none_or(|level| level >= LevelFilter::DEBUG)
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`. Whenever debug output ends up
/// enabled, each pipeline stage span is also reported with its duration on close.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let span_events = if reports_span_close(&env_filter) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
