use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::Method,
    routing::any,
    Router,
};

use crate::error::AppError;
use crate::handlers::{ApiRequest, ApiResponse, TodoHandler};
use crate::repository::TodoRepo;

/// Every method is forwarded; the todo handler decides what's allowed.
pub fn router<R>(handler: TodoHandler<R>) -> Router
where
    R: TodoRepo + 'static,
{
    Router::new()
        .route("/todos", any(todos::<R>))
        .route("/todos/:id", any(todo::<R>))
        .with_state(Arc::new(handler))
}

async fn todos<R: TodoRepo + 'static>(
    State(handler): State<Arc<TodoHandler<R>>>,
    method: Method,
    body: Bytes,
) -> Result<ApiResponse, AppError> {
    dispatch(&handler, method, None, body)
}

async fn todo<R: TodoRepo + 'static>(
    State(handler): State<Arc<TodoHandler<R>>>,
    method: Method,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<ApiResponse, AppError> {
    dispatch(&handler, method, Some(id), body)
}

fn dispatch<R: TodoRepo>(
    handler: &TodoHandler<R>,
    method: Method,
    path_id: Option<String>,
    body: Bytes,
) -> Result<ApiResponse, AppError> {
    tracing::debug!(%method, ?path_id, "todo request");
    let req = ApiRequest {
        method: method.as_str().to_owned(),
        path_id,
        body: body_text(body),
    };
    Ok(handler.handle(&req)?)
}

/// Empty or non UTF-8 bodies count as absent, so a todo parse on them fails.
fn body_text(body: Bytes) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    match String::from_utf8(body.to_vec()) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::debug!(error = %err, "request body is not valid UTF-8");
            None
        }
    }
}
