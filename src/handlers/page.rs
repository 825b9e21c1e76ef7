//! Main page handler

use axum::{extract::State, response::Html};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::assets::{Assets, INDEX};
use crate::server::AppState;

/// Served when the configured template cannot be read.
pub const MISSING_TEMPLATE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Error</title></head>
<body>
    <h1>Template file not found!</h1>
    <p>Please make sure the configured template file exists and is readable.</p>
</body>
</html>
"#;

/// Serve the main page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page().to_string())
}

/// Resolve the page HTML: the override file if one is configured, else the
/// embedded `index.html`.
pub fn load_template(template: Option<&Path>) -> String {
    match template {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(html) => html,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "template not readable, serving error page"
                );
                MISSING_TEMPLATE_PAGE.to_string()
            },
        },
        None => match Assets::get(INDEX) {
            Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
            None => MISSING_TEMPLATE_PAGE.to_string(),
        },
    }
}
