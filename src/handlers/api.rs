//! API handlers for the task list

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::reconcile::{local_today, reconcile};
use crate::server::AppState;

/// Task list response
#[derive(Debug, Serialize)]
pub struct TodosResponse {
    pub success: bool,
    pub todos: Vec<Value>,
}

/// Acknowledgement of a save
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// Replacement task list. A missing or `null` list means "no tasks".
#[derive(Debug, Deserialize)]
pub struct SaveTodosRequest {
    #[serde(default)]
    pub todos: Option<Vec<Value>>,
}

/// Return the stored task list; never fails
pub async fn list_todos(State(state): State<Arc<AppState>>) -> Json<TodosResponse> {
    // File reads and the optional reset block, so they run off the async workers.
    let todos = tokio::task::spawn_blocking(move || {
        if state.config.reconcile_on_read {
            let result = state.with_write_lock(|store| reconcile(store, local_today()));
            if let Err(e) = result {
                warn!(error = %e, "daily reset on read failed, serving stored list");
            }
        }
        state.store.load_tasks()
    })
    .await
    .unwrap_or_else(|e| {
        error!(error = %e, "task list read aborted, serving empty list");
        Vec::new()
    });

    debug!(count = todos.len(), "serving task list");
    Json(TodosResponse {
        success: true,
        todos,
    })
}

/// Replace the stored task list
pub async fn save_todos(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveTodosRequest>,
) -> Result<Json<SaveResponse>, (StatusCode, String)> {
    let todos = request.todos.unwrap_or_default();
    let count = todos.len();

    // fsync and rename happen under the write lock on a blocking thread.
    tokio::task::spawn_blocking(move || state.with_write_lock(|store| store.save_tasks(&todos)))
        .await
        .map_err(|e| {
            error!(error = %e, "task list save aborted");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .map_err(|e| {
            error!(error = %e, "failed to save task list");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    debug!(count, "task list replaced");
    Ok(Json(SaveResponse { success: true }))
}
