use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ApiError;

/// Transport-neutral response produced by the todo handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Body sent to the client when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "String::is_empty")]
    error: String,
}

fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN.as_str().to_string(),
            "*".to_string(),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS.as_str().to_string(),
            "true".to_string(),
        ),
    ])
}

/// Serializes `data` as the response body.
///
/// If `data` can't be serialized the response turns into a 500 whose body
/// carries the serialization error instead. Only a failure to serialize that
/// fallback body is returned as `Err`.
pub fn build_response<T>(data: &T, status_code: u16) -> Result<ApiResponse, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let (status_code, body) = match serde_json::to_string(data) {
        Ok(body) => (status_code, body),
        Err(err) => {
            tracing::error!(error = %err, "could not serialize response payload");
            let fallback = ErrorBody {
                error: err.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                serde_json::to_string(&fallback)?,
            )
        }
    };

    Ok(ApiResponse {
        status_code,
        headers: cors_headers(),
        body,
    })
}

pub fn build_ok_response<T>(data: &T) -> Result<ApiResponse, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    build_response(data, StatusCode::OK.as_u16())
}

pub fn build_error_response(err: &ApiError) -> Result<ApiResponse, serde_json::Error> {
    let body = ErrorBody {
        error: err.to_string(),
    };
    build_response(&body, err.status_code())
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(%name, "dropping invalid response header"),
            }
        }
        response
    }
}
