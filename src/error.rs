use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String }
}

// failure of the startup connect, kept around so later queries can report it
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ConnectionError(#[from] pub sqlx::Error);

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("database connection not yet established")]
    NotConnected,

    #[error("database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error)
}

impl IntoResponse for QueryError {

    fn into_response(self) -> Response {

        tracing::error!(error = %self, "query failed");

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()

    }

}
