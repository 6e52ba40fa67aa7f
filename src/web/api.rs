//! This module defines the HTTP handlers that receive debug logs.
use super::error::IngestError;
use crate::console::{render, Console};
use crate::types::{LogBatch, LogRecord};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Receives a single log record.
#[axum::debug_handler]
pub async fn ingest_single(
    State(console): State<Arc<Console>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    ingest::<LogRecord, _>(&console, &headers, body, render::single_record)
}

/// Receives a batch of log records under a `logs` field.
#[axum::debug_handler]
pub async fn ingest_batch(
    State(console): State<Arc<Console>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    ingest::<LogBatch, _>(&console, &headers, body, render::batch)
}

/// Any path other than the ingest endpoints.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Any method other than POST on an ingest endpoint.
pub async fn unsupported_method() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

fn ingest<T, F>(
    console: &Console,
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
    lines_for: F,
) -> Response
where
    T: DeserializeOwned,
    F: FnOnce(&T) -> Vec<String>,
{
    match decode::<T>(headers, body) {
        Ok(payload) => {
            console.print(&lines_for(&payload));
            acknowledge()
        }
        Err(e) => {
            debug!(error = ?e, "Rejected debug log request");
            console.print(&[render::request_error(&e)]);
            e.into_response()
        }
    }
}

/// Parses the body as a JSON object and deserializes it into `T`.
fn decode<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<T, IngestError> {
    if !headers.contains_key(header::CONTENT_LENGTH) {
        return Err(IngestError::MissingContentLength);
    }

    let body = body?;
    let value: Value = serde_json::from_slice(&body).map_err(IngestError::Json)?;
    if !value.is_object() {
        return Err(IngestError::NotAnObject(json_kind(&value)));
    }

    serde_json::from_value(value).map_err(IngestError::InvalidRecord)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn acknowledge() -> Response {
    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
}
