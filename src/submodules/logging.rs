use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber; stdout carries the model file.
///
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
