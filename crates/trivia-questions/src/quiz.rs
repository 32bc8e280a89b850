//! Random question selection for the quiz flow.
//!
//! A quiz draws from a pool: every question, or the questions of one
//! category. Questions the player has already seen are removed from the
//! pool and one of the remaining questions is picked uniformly at random.

use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::Connection;
use trivia_types::{Question, QuizCategory};

use crate::error::QuestionError;
use crate::questions::{list_questions, questions_in_category};

/// Result of asking for the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question from the pool.
    Next(Question),
    /// Every question in the pool has already been played.
    Finished,
}

/// Loads the candidate pool for a quiz category.
pub fn quiz_pool(conn: &Connection, category: QuizCategory) -> Result<Vec<Question>, QuestionError> {
    match category {
        QuizCategory::All => list_questions(conn),
        QuizCategory::Only(id) => questions_in_category(conn, id),
    }
}

/// Picks a random question from `pool` whose ID is not in `previous`.
///
/// Returns `None` when every question in the pool has been seen.
pub fn choose_unseen<'a, R: Rng + ?Sized>(
    pool: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let unseen: Vec<&Question> = pool
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    unseen.choose(rng).copied()
}

/// Draws the next quiz question for `category`, skipping `previous`.
///
/// # Errors
///
/// Returns `QuestionError::EmptyPool` when the category holds no questions
/// at all. A pool that is only exhausted by `previous` is not an error and
/// yields [`QuizOutcome::Finished`].
pub fn next_quiz_question<R: Rng + ?Sized>(
    conn: &Connection,
    category: QuizCategory,
    previous: &[i64],
    rng: &mut R,
) -> Result<QuizOutcome, QuestionError> {
    let pool = quiz_pool(conn, category)?;
    if pool.is_empty() {
        return Err(QuestionError::EmptyPool(category));
    }

    let outcome = match choose_unseen(&pool, previous, rng) {
        Some(question) => QuizOutcome::Next(question.clone()),
        None => QuizOutcome::Finished,
    };

    tracing::debug!(
        %category,
        pool_size = pool.len(),
        seen = previous.len(),
        finished = matches!(outcome, QuizOutcome::Finished),
        "quiz question drawn"
    );
    Ok(outcome)
}
