//! Serves the frontend bundle that `build.rs` copied into `static/dist`.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::{debug, warn};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Maps a request path onto a file inside the bundle. The root maps to the
/// index page.
pub fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        INDEX
    } else {
        path
    }
}

/// Unknown paths fall back to the index page so client-side routes resolve.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = asset_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => {
                debug!("{} not bundled, serving {}", file_path, INDEX);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => {
                warn!("frontend bundle is empty; build the frontend before the server");
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path(""), "index.html");
    }

    #[test]
    fn nested_paths_lose_leading_slash() {
        assert_eq!(asset_path("/styles-1a2b.css"), "styles-1a2b.css");
        assert_eq!(asset_path("/pkg/app_bg.wasm"), "pkg/app_bg.wasm");
    }
}
