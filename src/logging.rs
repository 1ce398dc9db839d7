// src/logging.rs
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_JSON: &str = "SO2SLACK_LOG_JSON";

/// Install the global subscriber.
///
/// Default filter is `so2slack=info,warn`; `RUST_LOG` overrides it.
/// `SO2SLACK_LOG_JSON=1` switches to JSON lines.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("so2slack=info,warn"));

    let json = std::env::var(ENV_LOG_JSON)
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}
