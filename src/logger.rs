use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps `-v` occurrences onto a level: warn, info, debug, then trace.
pub fn level_for(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Logs go to stderr so stdout stays clean for the report.
/// `RUST_LOG`, when set, overrides `verbosity`.
pub fn init_logger(verbosity: u64) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
