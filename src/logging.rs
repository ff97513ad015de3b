//! Diagnostic logging shared by the helper binaries.
//!
//! Logs go to stderr so stdout stays usable in pipelines. The filter comes
//! from `APIC_LOG` (standard `EnvFilter` syntax) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "APIC_LOG";

/// Install the global subscriber. Calling it more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
