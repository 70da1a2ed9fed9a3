// src/handlers/mod.rs
use axum::extract::{FromRequest, FromRequestParts};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::Message;

pub mod choices;
pub mod polls;
pub mod questions;

/// JSON request body; decode failures become 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Numeric `{id}` path segment; anything else becomes 400.
#[derive(FromRequestParts, Deserialize)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
#[serde(transparent)]
pub struct IdParam(pub i64);

/// Query-string filter for list endpoints.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Filter<T>(pub T);

/// GET /api/hello
pub async fn hello() -> Json<Message> {
    Json(Message {
        message: "Hello from the polls backend!",
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NoRoute
}
