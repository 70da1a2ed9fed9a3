// src/handlers/questions.rs
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::{Filter, IdParam, JsonBody};
use crate::error::ApiError;
use crate::models::{Message, NewQuestion, Question, QuestionFilter, QuestionUpdate};
use crate::routes::AppState;
use crate::{choice, question};

/// GET /api/questions/?poll_id=N
async fn list_questions(
    State(state): State<AppState>,
    Filter(filter): Filter<QuestionFilter>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = question::list(&state.pool, filter.poll_id).await?;
    Ok(Json(questions))
}

/// GET /api/questions/{id}, with the question's choices filled in.
async fn get_question(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Question>, ApiError> {
    let mut question = question::get(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound { resource: "question", id })?;

    question.choices = choice::list(&state.pool, Some(id)).await?;
    Ok(Json(question))
}

async fn create_question(
    State(state): State<AppState>,
    JsonBody(new): JsonBody<NewQuestion>,
) -> Result<Json<Question>, ApiError> {
    let question = question::create(&state.pool, new).await?;
    Ok(Json(question))
}

/// PUT /api/questions/{id}; the path id wins over any id in the body.
async fn update_question(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(update): JsonBody<QuestionUpdate>,
) -> Result<Json<Question>, ApiError> {
    let question = question::update(&state.pool, id, &update.text).await?;
    Ok(Json(question))
}

async fn delete_question(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Message>, ApiError> {
    question::delete(&state.pool, id).await?;
    Ok(Json(Message { message: "Question deleted" }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/questions", get(list_questions).post(create_question))
        .route("/api/questions/", get(list_questions).post(create_question))
        .route(
            "/api/questions/{id}",
            get(get_question).put(update_question).delete(delete_question),
        )
}
