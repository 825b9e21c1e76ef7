//! HTTP handlers

pub mod api;
pub mod assets;
pub mod page;
