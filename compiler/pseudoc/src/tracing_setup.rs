use std::sync::Once;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PSEUDO_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `PSEUDO_LOG=debug` or `PSEUDO_LOG=pseudo_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if PSEUDO_LOG is set
        if std::env::var(LOG_ENV).is_ok() {
            let filter = EnvFilter::from_env(LOG_ENV);
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
