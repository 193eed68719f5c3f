use super::response::{build_error_response, build_ok_response, ApiResponse};
use crate::error::ApiError;
use crate::models::Todo;
use crate::repository::{StorageError, TodoRepo};

/// Transport-neutral request handed to [`TodoHandler::handle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: String,
    pub path_id: Option<String>,
    pub body: Option<String>,
}
impl ApiRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.path_id = Some(id.into());
        self
    }
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Successful payloads.
enum Reply {
    One(Todo),
    Many(Vec<Todo>),
    Empty,
}

/// Routes todo requests by method and maps every outcome to a response.
#[derive(Debug, Clone)]
pub struct TodoHandler<R> {
    repo: R,
}

impl<R: TodoRepo> TodoHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    #[cfg(test)]
    pub(crate) fn repo(&self) -> &R {
        &self.repo
    }

    /// Errors only when even the fallback error body can't be serialized.
    pub fn handle(&self, req: &ApiRequest) -> Result<ApiResponse, serde_json::Error> {
        let outcome = match req.method.as_str() {
            "GET" => self.get(req),
            "POST" => self.post(req),
            "PUT" => self.put(req),
            "DELETE" => self.delete(req),
            other => {
                tracing::debug!(method = other, "method not allowed");
                Err(ApiError::MethodNotAllowed)
            }
        };

        match outcome {
            Ok(Reply::One(todo)) => build_ok_response(&todo),
            Ok(Reply::Many(todos)) => build_ok_response(&todos),
            Ok(Reply::Empty) => build_ok_response(""),
            Err(err) => build_error_response(&err),
        }
    }

    fn get(&self, req: &ApiRequest) -> Result<Reply, ApiError> {
        match &req.path_id {
            Some(id) => self.get_one(id),
            None => self.get_all(),
        }
    }

    fn get_one(&self, id: &str) -> Result<Reply, ApiError> {
        let todo = self.fetch(id)?.ok_or(ApiError::NotFound)?;
        Ok(Reply::One(todo))
    }

    fn get_all(&self) -> Result<Reply, ApiError> {
        let todos = self.repo.get_all().map_err(internal("get_all"))?;
        Ok(Reply::Many(todos))
    }

    fn post(&self, req: &ApiRequest) -> Result<Reply, ApiError> {
        let mut todo = parse_todo(req)?;
        if todo.has_id() {
            return Err(rejected("ID must be empty"));
        }

        self.repo.save(&mut todo).map_err(internal("save"))?;
        tracing::info!(id = %todo.id, "todo created");
        Ok(Reply::One(todo))
    }

    fn put(&self, req: &ApiRequest) -> Result<Reply, ApiError> {
        let id = require_id(req)?;
        let mut todo = parse_todo(req)?;
        if id != todo.id {
            return Err(rejected("ID in body does not match ID in path"));
        }

        self.fetch(id)?.ok_or(ApiError::NotFound)?;

        self.repo.save(&mut todo).map_err(internal("save"))?;
        tracing::info!(%id, "todo updated");
        Ok(Reply::One(todo))
    }

    fn delete(&self, req: &ApiRequest) -> Result<Reply, ApiError> {
        let id = require_id(req)?;

        self.fetch(id)?.ok_or(ApiError::NotFound)?;

        self.repo.delete(id).map_err(internal("delete"))?;
        tracing::info!(%id, "todo deleted");
        Ok(Reply::Empty)
    }

    fn fetch(&self, id: &str) -> Result<Option<Todo>, ApiError> {
        self.repo.get(id).map_err(internal("get"))
    }
}

fn require_id(req: &ApiRequest) -> Result<&str, ApiError> {
    req.path_id
        .as_deref()
        .ok_or_else(|| rejected("ID is required"))
}

// Malformed bodies are reported as internal errors, not bad requests.
fn parse_todo(req: &ApiRequest) -> Result<Todo, ApiError> {
    let body = req.body.as_deref().unwrap_or_default();
    serde_json::from_str(body).map_err(|err| {
        tracing::error!(error = %err, "could not parse todo");
        ApiError::Internal
    })
}

fn rejected(reason: &str) -> ApiError {
    tracing::debug!(reason, "bad request");
    ApiError::bad_request(reason)
}

fn internal(op: &'static str) -> impl Fn(StorageError) -> ApiError {
    move |err| {
        tracing::error!(op, error = %err, "storage failure");
        ApiError::Internal
    }
}
