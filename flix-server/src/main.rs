use std::{net::TcpListener, path::PathBuf};

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Path to the server configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn default_config_path() -> PathBuf {
    "/etc/flix/config.toml".into()
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = flix_server::cfg::get_config(&args.config.unwrap_or_else(default_config_path))?;
    flix_server::telemetry::init(env!("CARGO_PKG_NAME"), config.debug)?;

    let address = format!(
        "{}:{}",
        config.http_config.listen_address, config.http_config.listen_port
    );
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Binding the listener to {address}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    flix_server::run_app(listener, config).await?;

    Ok(())
}
