// src/question.rs
use sqlx::{PgExecutor, PgPool};

use crate::error::DbError;
use crate::models::{NewQuestion, Question};

pub async fn create(pool: &PgPool, new: NewQuestion) -> Result<Question, DbError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (poll_id, question_text)
        VALUES ($1, $2)
        RETURNING id, poll_id, question_text
        "#,
    )
    .bind(new.poll_id)
    .bind(&new.text)
    .fetch_one(pool)
    .await?;

    Ok(question)
}

/// Fetch the bare question row; `choices` is left empty.
pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Question>, DbError> {
    let question = sqlx::query_as::<_, Question>(
        "SELECT id, poll_id, question_text FROM questions WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(question)
}

pub async fn list(pool: &PgPool, poll_id: Option<i64>) -> Result<Vec<Question>, DbError> {
    match poll_id {
        Some(poll_id) => list_for_poll(pool, poll_id).await,
        None => {
            let questions = sqlx::query_as::<_, Question>(
                "SELECT id, poll_id, question_text FROM questions ORDER BY id",
            )
            .fetch_all(pool)
            .await?;
            Ok(questions)
        }
    }
}

pub async fn list_for_poll<'e, E>(executor: E, poll_id: i64) -> Result<Vec<Question>, DbError>
where
    E: PgExecutor<'e>,
{
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, poll_id, question_text FROM questions WHERE poll_id = $1 ORDER BY id",
    )
    .bind(poll_id)
    .fetch_all(executor)
    .await?;

    Ok(questions)
}

/// Replace the text of a question. The owning poll never changes.
pub async fn update(pool: &PgPool, id: i64, text: &str) -> Result<Question, DbError> {
    sqlx::query_as::<_, Question>(
        r#"
        UPDATE questions
        SET question_text = $1
        WHERE id = $2
        RETURNING id, poll_id, question_text
        "#,
    )
    .bind(text)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound { resource: "question", id })
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound { resource: "question", id });
    }
    Ok(())
}
