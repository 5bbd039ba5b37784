use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Directive used when `RUST_LOG` is unset. `--verbose` beats the configured
/// filter, which beats the built-in default.
pub fn filter_directive(verbose: bool, configured: Option<&str>) -> &str {
    match configured {
        _ if verbose => "department_json=debug,info",
        Some(directive) => directive,
        None => "department_json=info",
    }
}

fn stderr_layer<S>(
) -> tracing_subscriber::fmt::Layer<S, DefaultFields, Format, fn() -> std::io::Stderr> {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr as fn() -> std::io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Precedence: `RUST_LOG`, then `--verbose`, then the configured filter.
pub fn init_cli_logger(verbose: bool, format: LogFormat, filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, filter)));

    let (compact, json) = match format {
        LogFormat::Compact => (Some(stderr_layer().compact()), None),
        LogFormat::Json => (None, Some(stderr_layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
