use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `DNATEXT_LOG=debug`.
pub const LOG_ENV_VAR: &str = "DNATEXT_LOG";

///
/// Install a stderr subscriber filtered by `DNATEXT_LOG` (default `warn`).
/// Records emitted through the `log` facade by the library crates are
/// forwarded to it as well.
///
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second call (e.g. from tests) leaves the first subscriber in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
