use anyhow::Context;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Installs the global subscriber: bunyan formatted JSON lines on stdout.
///
/// `RUST_LOG` takes precedence over the level selected by `debug`. Records emitted through the
/// `log` facade, as the catalog client does, are forwarded to the same subscriber.
pub fn init(name: &str, debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.to_string(), std::io::stdout))
        .try_init()
        .context("Installing the tracing subscriber")
}
