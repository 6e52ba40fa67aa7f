//! Errors raised while handling an ingest request.
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("malformed JSON body: {0}")]
    Json(#[source] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid log payload: {0}")]
    InvalidRecord(#[source] serde_json::Error),
}

impl IntoResponse for IngestError {
    /// Every ingest failure is reported to the client as a bare 500; the
    /// details stay on the server console.
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
