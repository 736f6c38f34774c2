/// Install a `tracing` subscriber writing to stderr.
///
/// Logging stays off unless `RUST_LOG` is set or `verbose` is requested.
/// `RUST_LOG` wins over `verbose` when both are present.
pub(crate) fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_err() && !verbose {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
