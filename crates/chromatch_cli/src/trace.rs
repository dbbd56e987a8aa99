//! Tracing initialization for the CLI.
//!
//! Events go to stderr so stdout stays clean for JSON output and shell
//! pipes. `--verbose` takes precedence, then `RUST_LOG`, then info.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn init(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    Registry::default().with(env_filter).with(fmt_layer).init();
}
