use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber writing to stderr.
///
/// `RUST_LOG` wins over `default_filter`.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("Invalid log filter: {default_filter}"))?,
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Already set when called twice, e.g. from tests
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
