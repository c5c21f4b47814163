use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Shape of the diagnostic lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    /// Accepts `json`, or `pretty`/`compact`/`text` for the compact format.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "compact" | "text" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

/// Installs the global subscriber on stderr; stdout only ever carries the
/// result document. `RUST_LOG` takes precedence over `log_level`.
pub fn init(log_format: &str, log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let format = LogFormat::from_name(log_format);
    let registry = tracing_subscriber::registry().with(filter);

    match format.unwrap_or(LogFormat::Compact) {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    if format.is_none() {
        tracing::warn!(
            log_format,
            "Unknown log format, using compact (valid options: json, pretty)"
        );
    }
}
