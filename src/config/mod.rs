use std::env;

/// Output flavor for the tracing fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_format: LogFormat,

    // Bench
    pub bench_ops: usize,
}

impl AppConfig {
    /// Read configuration from the environment. Every field has a default
    /// and malformed values fall back rather than fail, matching the
    /// leniency of the CLI surface.
    pub fn from_env() -> Self {
        Self {
            log_format: LogFormat::from_str(&env::var("LOG_FORMAT").unwrap_or_default()),
            bench_ops: env::var("BENCH_OPS")
                .unwrap_or_else(|_| "100000".into())
                .parse()
                .unwrap_or(100_000),
        }
    }
}

pub fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}
