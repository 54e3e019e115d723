use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `filter`
///
/// Returns false if a subscriber was already installed; the existing one is
/// kept. An unparseable directive falls back to "info".
pub fn init_logging(filter: &str) -> bool {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
