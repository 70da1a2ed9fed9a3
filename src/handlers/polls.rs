// src/handlers/polls.rs
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::{IdParam, JsonBody};
use crate::error::ApiError;
use crate::models::{Message, NewPoll, Poll};
use crate::poll;
use crate::routes::AppState;

/// GET /api/polls/
async fn list_polls(State(state): State<AppState>) -> Result<Json<Vec<Poll>>, ApiError> {
    let polls = poll::list(&state.pool).await?;
    Ok(Json(polls))
}

/// GET /api/polls/{id}
async fn get_poll(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Poll>, ApiError> {
    poll::get(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound { resource: "poll", id })
}

/// POST /api/polls/
async fn create_poll(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewPoll>,
) -> Result<Json<Poll>, ApiError> {
    let poll = poll::create(&state.pool, new).await?;
    Ok(Json(poll))
}

/// DELETE /api/polls/{id}
async fn delete_poll(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Message>, ApiError> {
    poll::delete(&state.pool, id).await?;
    Ok(Json(Message { message: "Poll deleted" }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/polls", get(list_polls).post(create_poll))
        .route("/api/polls/", get(list_polls).post(create_poll))
        .route("/api/polls/{id}", get(get_poll).delete(delete_poll))
}
