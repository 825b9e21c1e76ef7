//! Embedded static assets

use rust_embed::Embed;

/// Embedded assets for the to-do UI
#[derive(Embed)]
#[folder = "assets/"]
pub struct Assets;

/// Page served at `/` when no template override is configured.
pub const INDEX: &str = "index.html";
