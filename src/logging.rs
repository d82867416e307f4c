use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path. Unset or empty means no logging.
pub const LOG_ENV: &str = "PROXYENV_LOG";

/// Initialize tracing with an opt-in file sink.
///
/// Stdout is the prefix line itself and stderr stays quiet for the
/// wrapping installer, so events only ever go to `{PROXYENV_LOG}.{ts}.{pid}`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    // One file per run; installers may invoke us several times per second.
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let file_path = format!("{log_path}.{stamp}.{}", std::process::id());

    let file = match std::fs::File::create(&file_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("proxyenv: cannot open log file {file_path}: {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339()),
        )
        .init();
}
