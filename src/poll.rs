// src/poll.rs
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::collections::HashMap;

use crate::error::DbError;
use crate::models::{Choice, NewPoll, Poll, Question};
use crate::{choice, question};

/// Length of the voting window when the caller gives no end date.
const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Fill in missing dates: start defaults to `now`, end to `now` plus the default window.
pub fn default_window(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        start.unwrap_or(now),
        end.unwrap_or_else(|| now + Duration::hours(DEFAULT_WINDOW_HOURS)),
    )
}

pub async fn create(pool: &PgPool, new: NewPoll) -> Result<Poll, DbError> {
    let (start_date, end_date) = default_window(new.start_date, new.end_date, Utc::now());

    let poll = sqlx::query_as::<_, Poll>(
        r#"
        INSERT INTO polls (title, description, created_by, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, description, created_by, start_date, end_date, created_at
        "#,
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.created_by)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await?;

    tracing::info!(poll_id = poll.id, "poll created");
    Ok(poll)
}

/// Fetch one poll with its questions and their choices.
///
/// Runs three reads in a single read-only snapshot: the poll row, its
/// questions, then every choice for those questions in one batch.
pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Poll>, DbError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let poll = sqlx::query_as::<_, Poll>(
        r#"
        SELECT id, title, description, created_by, start_date, end_date, created_at
        FROM polls
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut poll) = poll else {
        return Ok(None);
    };

    let questions = question::list_for_poll(&mut *tx, id).await?;
    let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    let choices = choice::list_for_questions(&mut *tx, &question_ids).await?;
    tx.commit().await?;

    tracing::debug!(
        poll_id = id,
        questions = questions.len(),
        choices = choices.len(),
        "assembled poll"
    );
    poll.questions = Some(nest_choices(questions, choices));
    Ok(Some(poll))
}

/// Attach each choice to its question, keeping both in the order given.
pub fn nest_choices(mut questions: Vec<Question>, choices: Vec<Choice>) -> Vec<Question> {
    let mut by_question: HashMap<i64, Vec<Choice>> = HashMap::new();
    for c in choices {
        by_question.entry(c.question_id).or_default().push(c);
    }

    for q in &mut questions {
        q.choices = by_question.remove(&q.id).unwrap_or_default();
    }
    questions
}

pub async fn list(pool: &PgPool) -> Result<Vec<Poll>, DbError> {
    let polls = sqlx::query_as::<_, Poll>(
        r#"
        SELECT id, title, description, created_by, start_date, end_date, created_at
        FROM polls
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(polls)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM polls WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound { resource: "poll", id });
    }
    tracing::info!(poll_id = id, "poll deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::{NewChoice, NewQuestion};

    fn question_row(id: i64) -> Question {
        Question {
            id,
            poll_id: 1,
            text: format!("q{id}"),
            choices: Vec::new(),
        }
    }

    fn choice_row(id: i64, question_id: i64) -> Choice {
        Choice {
            id,
            question_id,
            choice_text: format!("c{id}"),
        }
    }

    #[test]
    fn missing_dates_default_to_a_day_from_now() {
        let now = Utc::now();
        let (start, end) = default_window(None, None, now);
        assert_eq!(start, now);
        assert_eq!(end - start, Duration::hours(24));
    }

    #[test]
    fn explicit_dates_are_kept() {
        let now = Utc::now();
        let start = now - Duration::days(3);
        let end = now + Duration::days(7);
        assert_eq!(default_window(Some(start), Some(end), now), (start, end));

        let (_, end) = default_window(Some(start), None, now);
        assert_eq!(end, now + Duration::hours(24));
    }

    #[test]
    fn nests_choices_under_their_questions() {
        let nested = nest_choices(
            vec![question_row(10), question_row(11), question_row(12)],
            vec![choice_row(1, 10), choice_row(2, 11), choice_row(3, 10), choice_row(4, 99)],
        );

        assert_eq!(nested.len(), 3);
        let ids = |q: &Question| q.choices.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids(&nested[0]), vec![1, 3]);
        assert_eq!(ids(&nested[1]), vec![2]);
        assert!(nested[2].choices.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_returns_full_graph() {
        let pool = test_pool().await;
        let poll = create(
            &pool,
            NewPoll {
                title: "Lunch".into(),
                description: "Where to eat".into(),
                created_by: 1,
                start_date: None,
                end_date: None,
            },
        )
        .await
        .unwrap();

        let mut expected = Vec::new();
        for text in ["Day?", "Place?"] {
            let q = question::create(&pool, NewQuestion { poll_id: poll.id, text: text.into() })
                .await
                .unwrap();
            let mut choice_ids = Vec::new();
            for option in ["a", "b"] {
                let c = choice::create(
                    &pool,
                    NewChoice { question_id: q.id, choice_text: option.into() },
                )
                .await
                .unwrap();
                choice_ids.push(c.id);
            }
            expected.push((q.id, choice_ids));
        }

        let fetched = get(&pool, poll.id).await.unwrap().expect("poll exists");
        let questions = fetched.questions.expect("nested questions");
        let actual: Vec<(i64, Vec<i64>)> = questions
            .iter()
            .map(|q| (q.id, q.choices.iter().map(|c| c.id).collect()))
            .collect();
        assert_eq!(actual, expected);

        delete(&pool, poll.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_missing_poll_is_not_found() {
        let pool = test_pool().await;
        let err = delete(&pool, i64::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "poll", .. }));
        assert!(get(&pool, i64::MAX).await.unwrap().is_none());
    }
}
