use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Build the event filter for test output from `RUST_LOG`-style directives.
pub fn filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives.unwrap_or(DEFAULT_DIRECTIVES))
}

/// Install a process-wide subscriber that writes through the test harness.
///
/// Resolution and write events from the readers show up in a failing test's
/// captured output. Only the first call in a process succeeds; later calls
/// report the subscriber that is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directives = std::env::var("RUST_LOG").ok();
    let filter = filter(directives.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_test_writer().compact())
        .try_init()?;
    Ok(())
}
