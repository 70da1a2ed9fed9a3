// src/handlers/choices.rs
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::{Filter, IdParam, JsonBody};
use crate::choice;
use crate::error::ApiError;
use crate::models::{Choice, ChoiceFilter, ChoiceUpdate, Message, NewChoice};
use crate::routes::AppState;

async fn list_choices(
    State(state): State<AppState>,
    Filter(filter): Filter<ChoiceFilter>,
) -> Result<Json<Vec<Choice>>, ApiError> {
    let choices = choice::list(&state.pool, filter.question_id).await?;
    Ok(Json(choices))
}

async fn get_choice(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Choice>, ApiError> {
    choice::get(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound { resource: "choice", id })
}

async fn create_choice(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewChoice>,
) -> Result<Json<Choice>, ApiError> {
    let choice = choice::create(&state.pool, new).await?;
    Ok(Json(choice))
}

async fn update_choice(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(update): JsonBody<ChoiceUpdate>,
) -> Result<Json<Choice>, ApiError> {
    let choice = choice::update(&state.pool, id, &update.choice_text).await?;
    Ok(Json(choice))
}

async fn delete_choice(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Message>, ApiError> {
    choice::delete(&state.pool, id).await?;
    Ok(Json(Message { message: "Choice deleted" }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/choices", get(list_choices).post(create_choice))
        .route("/api/choices/", get(list_choices).post(create_choice))
        .route(
            "/api/choices/{id}",
            get(get_choice).put(update_choice).delete(delete_choice),
        )
}
