use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub text: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Vote {
    pub id: i32,
    pub choice_id: i32,
    pub voted_at: DateTime<Utc>,
}

/// One choice of the current poll together with its vote count.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ChoiceTally {
    pub id: i32,
    pub text: String,
    pub votes: i64,
}

/// The most recently created question with per-choice tallies.
#[derive(Debug, Serialize)]
pub struct CurrentPoll {
    pub question: Question,
    pub results: Vec<ChoiceTally>,
}
