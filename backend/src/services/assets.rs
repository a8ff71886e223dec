//! Serves the Trunk bundle baked into the binary.
//!
//! Paths that match no embedded file get `index.html`, so client-side
//! navigation survives a page reload.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            debug!("no embedded asset for /{file_path}, serving {INDEX}");
            match STATIC_DIR.get_file(INDEX) {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec()),
                None => HttpResponse::NotFound().body("Not Found"),
            }
        }
    }
}
