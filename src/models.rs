// models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Poll {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_by: i64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Only filled in by the single-poll fetch.
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub poll_id: i64,
    #[sqlx(rename = "question_text")]
    pub text: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPoll {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_by: i64,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    pub poll_id: i64,
    pub text: String,
}

/// Body of `PUT /api/questions/{id}`; any `id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct QuestionUpdate {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NewChoice {
    pub question_id: i64,
    pub choice_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceUpdate {
    pub choice_text: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionFilter {
    pub poll_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceFilter {
    pub question_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
