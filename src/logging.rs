use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr subscriber for the binaries. `RUST_LOG` takes
/// precedence, otherwise `verbose` selects between `debug` and `warn`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
