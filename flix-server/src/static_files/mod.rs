use actix_web::web;

include!(concat!(env!("OUT_DIR"), "/generated.rs"));

/// The `index.html` of the packed site bundle, if the bundle was built before the server.
pub fn index_html() -> Option<String> {
    let generated = generate();
    let index = generated.get("index.html")?;
    match std::str::from_utf8(index.data) {
        Ok(index) => Some(index.to_string()),
        Err(e) => {
            tracing::error!("The packed index.html is not valid UTF-8: {e}");
            None
        }
    }
}

pub fn register_static_files(app: &mut web::ServiceConfig) {
    let generated = generate();

    app.service(
        actix_web_static_files::ResourceFiles::new("/", generated).resolve_not_found_to_root(),
    );
}
