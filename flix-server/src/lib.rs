use actix_web::{App, HttpServer, web};
use flix_client::CatalogClient;

use std::net::TcpListener;

use crate::cfg::FlixConfig;
use crate::transport::ReqwestTransport;

pub mod build_info;
pub mod cfg;
pub mod telemetry;

mod api;
mod render;
mod static_files;
mod transport;

pub async fn run_app(listener: TcpListener, config: FlixConfig) -> anyhow::Result<()> {
    let transport = ReqwestTransport::new(config.backend_config.request_timeout)?;
    let client = CatalogClient::new(config.backend_config.origin.to_string(), transport);
    tracing::info!(origin = client.origin(), "Using catalog backend");

    let shell = static_files::index_html().unwrap_or_else(|| {
        tracing::warn!("The site bundle is not packed, serving a bare shell");
        render::FALLBACK_SHELL.to_string()
    });

    let api_data = web::Data::new(api::ApiData::new(client, shell));

    HttpServer::new(move || {
        App::new()
            .app_data(api_data.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(api::register_handlers)
            .configure(static_files::register_static_files)
    })
    .listen(listener)?
    .run()
    .await?;

    Ok(())
}
