//! Logging Configuration

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_LEVEL_ENV: &str = "FACTCHECK_LOG_LEVEL";

pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

pub fn level_to_str(level: LevelFilter) -> &'static str {
    if level == LevelFilter::TRACE {
        "trace"
    } else if level == LevelFilter::DEBUG {
        "debug"
    } else if level == LevelFilter::INFO {
        "info"
    } else if level == LevelFilter::WARN {
        "warn"
    } else if level == LevelFilter::ERROR {
        "error"
    } else {
        "off"
    }
}

fn resolve_level(env_value: Option<String>, verbose: bool) -> LevelFilter {
    let fallback = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    match env_value {
        Some(val) => parse_log_level(&val).unwrap_or_else(|| {
            eprintln!(
                "Warning: Invalid {} '{}', falling back to default",
                LOG_LEVEL_ENV, val
            );
            fallback
        }),
        None => fallback,
    }
}

/// Installs the stderr subscriber. `log` records from the library crates are
/// bridged into it.
pub fn init(verbose: bool) {
    let level = resolve_level(std::env::var(LOG_LEVEL_ENV).ok(), verbose);
    let filter = EnvFilter::new(level_to_str(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
