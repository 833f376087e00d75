//! Tracing setup for the replay binary.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file to write to instead of stderr.
pub const LOG_FILE_ENV: &str = "VIEWSTACK_LOG";

/// Initialize tracing.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default: `warn`) so they don't
/// drown the replay output. If [`LOG_FILE_ENV`] is set, logs go to a file
/// named `{path}.{timestamp}.{pid}` so parallel runs never share one.
///
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    let Ok(base) = std::env::var(LOG_FILE_ENV) else {
        let _ = registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
        return;
    };

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    match std::fs::File::create(&path) {
        Ok(file) => {
            let _ = registry
                .with(
                    fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init();
        }
        Err(err) => eprintln!("Warning: cannot create log file {}: {}", path, err),
    }
}

fn unique_log_path(base: &str, timestamp: u64, pid: u32) -> String {
    format!("{}.{}.{}", base, timestamp, pid)
}
