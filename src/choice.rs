// src/choice.rs
use sqlx::{PgExecutor, PgPool};

use crate::error::DbError;
use crate::models::{Choice, NewChoice};

pub async fn create(pool: &PgPool, new: NewChoice) -> Result<Choice, DbError> {
    let choice = sqlx::query_as::<_, Choice>(
        r#"
        INSERT INTO choices (question_id, choice_text)
        VALUES ($1, $2)
        RETURNING id, question_id, choice_text
        "#,
    )
    .bind(new.question_id)
    .bind(&new.choice_text)
    .fetch_one(pool)
    .await?;

    Ok(choice)
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Choice>, DbError> {
    let choice = sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text FROM choices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(choice)
}

pub async fn list<'e, E>(executor: E, question_id: Option<i64>) -> Result<Vec<Choice>, DbError>
where
    E: PgExecutor<'e>,
{
    let choices = match question_id {
        Some(question_id) => {
            sqlx::query_as::<_, Choice>(
                r#"
                SELECT id, question_id, choice_text
                FROM choices
                WHERE question_id = $1
                ORDER BY id
                "#,
            )
            .bind(question_id)
            .fetch_all(executor)
            .await?
        }
        None => {
            sqlx::query_as::<_, Choice>(
                "SELECT id, question_id, choice_text FROM choices ORDER BY id",
            )
            .fetch_all(executor)
            .await?
        }
    };

    Ok(choices)
}

/// Every choice belonging to any of `question_ids`, in one round trip.
pub async fn list_for_questions<'e, E>(
    executor: E,
    question_ids: &[i64],
) -> Result<Vec<Choice>, DbError>
where
    E: PgExecutor<'e>,
{
    if question_ids.is_empty() {
        return Ok(Vec::new());
    }

    let choices = sqlx::query_as::<_, Choice>(
        r#"
        SELECT id, question_id, choice_text
        FROM choices
        WHERE question_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(question_ids)
    .fetch_all(executor)
    .await?;

    Ok(choices)
}

pub async fn update(pool: &PgPool, id: i64, text: &str) -> Result<Choice, DbError> {
    sqlx::query_as::<_, Choice>(
        r#"
        UPDATE choices
        SET choice_text = $1
        WHERE id = $2
        RETURNING id, question_id, choice_text
        "#,
    )
    .bind(text)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound { resource: "choice", id })
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM choices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound { resource: "choice", id });
    }
    Ok(())
}
