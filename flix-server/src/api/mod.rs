use actix_web::{HttpResponse, Responder, get, web};
use flix_client::CatalogClient;

use crate::build_info;
use crate::transport::ReqwestTransport;

mod pages;

/// Shared resources used in HTTP handlers
pub struct ApiData {
    client: CatalogClient<ReqwestTransport>,
    /// The site `index.html`, metadata gets injected into it.
    shell: String,
}

impl ApiData {
    pub fn new(client: CatalogClient<ReqwestTransport>, shell: String) -> Self {
        Self { client, shell }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(build_info::get())
}

/// Registers the handlers answered by the server itself. Must be configured before the static
/// files, which catch every other path.
pub fn register_handlers(app: &mut web::ServiceConfig) {
    app.service(health).service(pages::course_page);
}
