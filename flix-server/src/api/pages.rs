use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};
use flix_client::controller::{CoursePage, PageMetadata, load_course_page};

use super::ApiData;
use crate::render::inject_metadata;

/// The site shell with the metadata of the course. The site itself renders the page, including
/// the not found case, so the response is successful either way.
#[get("/courses/{slug}")]
async fn course_page(data: web::Data<ApiData>, slug: web::Path<String>) -> impl Responder {
    let page = load_course_page(&data.client, &slug).await;
    if page == CoursePage::NotFound {
        tracing::info!(slug = %slug, "Rendering course page without course");
    }

    let metadata = PageMetadata::for_course_page(&page);
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(inject_metadata(&data.shell, &metadata))
}
