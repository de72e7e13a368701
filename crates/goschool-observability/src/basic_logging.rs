use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Dependencies that are chatty at `info` and `debug`.
const NOISY_TARGETS: [&str; 4] = ["sqlx", "hyper", "hyper_util", "reqwest"];

/// Filter directives used when `RUST_LOG` is not set.
///
/// `log_level` applies to every target except the noisy dependencies, which
/// stay at `warn`.
pub fn default_filter(log_level: &str) -> String {
    let mut directives = vec![log_level.to_string()];
    directives.extend(NOISY_TARGETS.iter().map(|target| format!("{target}=warn")));
    directives.join(",")
}

/// Initialize console logging for the provisioning CLI.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` when set, otherwise built from `LOG_LEVEL` (default: "info")
/// - **Filtering**: Noisy dependencies filtered to warn level for cleaner output
/// - **Format**: Compact format with timestamps and ANSI colors
/// - **Target**: Shows module paths (e.g., "goschool_db::schema")
///
/// Calling it more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
