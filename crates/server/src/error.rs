use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur when running the Commhub server.
///
/// Provider failures never surface here: they are rendered as error banners
/// in the dashboard page. `ServerError` covers the machinery around that.
#[derive(Debug, Error)]
pub enum ServerError {
    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The request named a channel the dashboard does not have.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UnknownChannel(name) => {
                (StatusCode::NOT_FOUND, format!("unknown channel: {name}"))
            }
            Self::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::Template(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
