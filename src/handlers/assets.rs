//! Embedded UI files under `/assets/`

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::Assets;

/// The UI ships inside the binary, so it only changes on upgrade.
const CACHE_CONTROL: &str = "public, max-age=3600";

/// Serve one embedded UI file
pub async fn serve(Path(path): Path<String>) -> Response {
    asset_response(&path)
}

/// Look up `path` among the embedded files.
///
/// Unknown paths get a plain-text 404 naming the missing file.
pub fn asset_response(path: &str) -> Response {
    let path = path.trim_start_matches('/');

    let Some(content) = Assets::get(path) else {
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("No such UI asset: {path}"),
        )
            .into_response();
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    (
        [
            (header::CONTENT_TYPE, mime.as_ref()),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        content.data.into_owned(),
    )
        .into_response()
}
