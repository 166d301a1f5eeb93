//! HTTP client for the external task store.
//!
//! The store owns all task persistence; this module only reads full
//! snapshots and issues single-field status mutations by id.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Task, TaskId, TaskStatus, TasksResponse};

/// List endpoint; returns the full task collection.
pub const GET_TASKS_PATH: &str = "/get_tasks";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never completed (fetch rejected, no browser window).
    #[error("network request failed: {0}")]
    Network(String),

    /// The store answered with a non-2xx status.
    #[error("task store returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected shape.
    #[error("malformed task store response: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Malformed(_))
    }
}

/// Path for the status-update endpoint; parameters travel in the path,
/// the request carries no body.
pub fn update_status_path(id: &TaskId, status: TaskStatus) -> String {
    format!("/update_task_status/{id}/{status}")
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

async fn send(method: &str, path: &str) -> Result<Response, StoreError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let request = Request::new_with_str_and_init(path, &opts)
        .map_err(|e| StoreError::Network(js_error(&e)))?;

    let window =
        web_sys::window().ok_or_else(|| StoreError::Network("no browser window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| StoreError::Network(js_error(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| StoreError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(StoreError::Status(response.status()));
    }
    Ok(response)
}

/// Fetch the full task snapshot from the store.
pub async fn fetch_tasks() -> Result<Vec<Task>, StoreError> {
    let response = send("GET", GET_TASKS_PATH).await?;
    let body = response
        .json()
        .map_err(|e| StoreError::Malformed(js_error(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| StoreError::Malformed(js_error(&e)))?;
    let parsed: TasksResponse =
        serde_wasm_bindgen::from_value(body).map_err(|e| StoreError::Malformed(e.to_string()))?;
    Ok(parsed.tasks)
}

/// Instruct the store to move one task to a new status. The response body
/// carries nothing of interest; only the HTTP status is inspected.
pub async fn update_task_status(id: &TaskId, status: TaskStatus) -> Result<(), StoreError> {
    send("POST", &update_status_path(id, status)).await?;
    Ok(())
}
