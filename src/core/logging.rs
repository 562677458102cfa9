// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::format::FmtSpan;

// Used when RUST_LOG is not set
const DEFAULT_FILTER: &str = "ping_demo_api=debug,tower_http=debug,axum=trace";

// Initialize the tracing subscriber, honouring RUST_LOG when present
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

// End of file: /src/core/logging.rs
