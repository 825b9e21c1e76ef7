//! Daily To-Do
//!
//! A single-user to-do list served to the browser by a small local HTTP
//! server. Tasks live in a JSON file on disk and their `completed` flags are
//! cleared once per calendar day.
//!
//! # Usage
//!
//! ```bash
//! daily-todo --port 5000 --data-dir ./data
//! ```
//!
//! # Pieces
//!
//! - [`store`]: the [`TodoStore`] contract with file and in-memory backends
//! - [`reconcile`]: the daily reset of completed flags
//! - [`server`]: the axum application and startup sequence

mod assets;
pub mod config;
pub mod error;
mod handlers;
pub mod reconcile;
pub mod server;
pub mod store;
pub mod task;

pub use config::AppConfig;
pub use error::StoreError;
pub use reconcile::{local_today, reconcile, ReconcileOutcome};
pub use server::{AppState, TodoServer};
pub use store::{FileStore, InMemoryStore, TodoStore};
pub use task::Task;
