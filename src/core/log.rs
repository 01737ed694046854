//! Diagnostics for the feed commands.
//!
//! Output is silent unless `-v` is passed or `RUST_LOG` is set. Everything goes to
//! stderr, leaving stdout to the emitted documents.

use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// `RUST_LOG` wins when set; otherwise `-v` turns on debug output for this crate only.
fn directives(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(env) if !env.is_empty() => env.to_string(),
        _ if verbose => "shopping_feed=debug".to_string(),
        _ => "off".to_string(),
    }
}

pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(directives(verbose, rust_log.as_deref()));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
