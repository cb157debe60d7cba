//! Poll service: the three operations behind the HTTP surface.

use redis::aio::ConnectionManager;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::cache;
use crate::error::AppError;
use crate::models::{Choice, ChoiceTally, CurrentPoll, Question, Vote};

/// Splits a raw comma-separated options string, trimming each part and
/// dropping empties. Duplicates are kept as distinct choices.
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The most recently created question with per-choice vote counts, or
/// `None` when no poll exists yet. Choices with zero votes are included
/// at count 0.
pub async fn current_poll(pool: &PgPool) -> Result<Option<CurrentPoll>, AppError> {
    let question = sqlx::query_as::<_, Question>(
        "SELECT id, text, created_at FROM questions
         ORDER BY created_at DESC, id DESC
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    let Some(question) = question else {
        return Ok(None);
    };

    let results = sqlx::query_as::<_, ChoiceTally>(
        "SELECT c.id, c.text, COUNT(v.id) AS votes
         FROM choices c
         LEFT JOIN votes v ON v.choice_id = c.id
         WHERE c.question_id = $1
         GROUP BY c.id, c.text
         ORDER BY c.id",
    )
    .bind(question.id)
    .fetch_all(pool)
    .await?;

    Ok(Some(CurrentPoll { question, results }))
}

/// Records one vote for an existing choice, then invalidates the cached
/// results.
pub async fn cast_vote(
    pool: &PgPool,
    cache: &ConnectionManager,
    choice_id: i32,
) -> Result<(), AppError> {
    let choice = sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, text FROM choices WHERE id = $1",
    )
    .bind(choice_id)
    .fetch_optional(pool)
    .await?;

    let Some(choice) = choice else {
        return Err(AppError::ChoiceNotFound);
    };

    let vote = sqlx::query_as::<_, Vote>(
        "INSERT INTO votes (choice_id) VALUES ($1) RETURNING id, choice_id, voted_at",
    )
    .bind(choice.id)
    .fetch_one(pool)
    .await?;

    debug!(vote = vote.id, choice = choice.id, "vote recorded");
    cache::invalidate_results(cache).await;
    Ok(())
}

/// Checks poll-creation input before any store work: the question must be
/// non-empty after trimming and at least two options must survive parsing.
pub fn validate_new_poll<'a>(text: &'a str, raw_options: &str) -> Result<(&'a str, Vec<String>), AppError> {
    let text = text.trim();
    let options = parse_options(raw_options);
    if text.is_empty() || options.len() < 2 {
        return Err(AppError::TooFewOptions);
    }
    Ok((text, options))
}

/// Creates a question and its choices atomically, then invalidates the
/// cached results.
pub async fn create_poll(
    pool: &PgPool,
    cache: &ConnectionManager,
    text: &str,
    raw_options: &str,
) -> Result<(), AppError> {
    let (text, options) = validate_new_poll(text, raw_options)?;

    let mut tx = pool.begin().await?;

    let (question_id,): (i32,) =
        sqlx::query_as("INSERT INTO questions (text) VALUES ($1) RETURNING id")
            .bind(text)
            .fetch_one(&mut *tx)
            .await?;

    for option in &options {
        sqlx::query("INSERT INTO choices (question_id, text) VALUES ($1, $2)")
            .bind(question_id)
            .bind(option)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(question = question_id, options = options.len(), "poll created");
    cache::invalidate_results(cache).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_are_trimmed_and_empties_dropped() {
        assert_eq!(parse_options("Red, Blue, Blue, "), ["Red", "Blue", "Blue"]);
        assert_eq!(parse_options("  A  ,B"), ["A", "B"]);
    }

    #[test]
    fn duplicates_survive_parsing() {
        assert_eq!(parse_options("Red, Red"), ["Red", "Red"]);
    }

    #[test]
    fn degenerate_inputs_yield_too_few_options() {
        assert_eq!(parse_options("A"), ["A"]);
        assert!(parse_options(" , , ").is_empty());
        assert!(parse_options("").is_empty());
    }

    #[test]
    fn validation_rejects_short_or_empty_input() {
        assert!(matches!(
            validate_new_poll("Favorite color?", "Red"),
            Err(AppError::TooFewOptions)
        ));
        assert!(matches!(
            validate_new_poll("Favorite color?", " , , "),
            Err(AppError::TooFewOptions)
        ));
        assert!(matches!(
            validate_new_poll("   ", "Red, Blue"),
            Err(AppError::TooFewOptions)
        ));
    }

    #[test]
    fn validation_trims_the_question_and_keeps_options() {
        let (text, options) = validate_new_poll(" Favorite color? ", "Red, Blue, Blue, ").unwrap();
        assert_eq!(text, "Favorite color?");
        assert_eq!(options, ["Red", "Blue", "Blue"]);
    }
}
