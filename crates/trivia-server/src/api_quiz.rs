//! Quiz API handler.

use crate::api::{with_conn, ApiError};
use crate::AppState;
use axum::extract::{rejection::JsonRejection, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trivia_questions::{next_quiz_question, QuizOutcome};
use trivia_types::{lenient_int, Question, QuizCategory};

/// The `quiz_category` object posted by the quiz client. Its `type` label
/// is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryRef {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
}

/// Request body for `POST /play`.
#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub quiz_category: QuizCategoryRef,
    pub previous_questions: Vec<i64>,
}

/// Response body for `POST /play`.
///
/// `success` is `false` with a `null` question once every question in the
/// category has been played.
#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub success: bool,
    pub previous_questions: Vec<i64>,
    pub category: i64,
    pub question: Option<Question>,
}

/// POST /play
///
/// Draws a random question from the requested category (`0` for all
/// categories) that is not listed in `previous_questions`.
pub async fn play_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<PlayRequest>, JsonRejection>,
) -> Result<Json<PlayResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    let category = QuizCategory::from_id(request.quiz_category.id);
    let previous = request.previous_questions;

    let (outcome, previous) = with_conn(&state, move |conn| {
        let mut rng = rand::thread_rng();
        let outcome = next_quiz_question(conn, category, &previous, &mut rng)?;
        Ok((outcome, previous))
    })
    .await?;

    let question = match outcome {
        QuizOutcome::Next(question) => Some(question),
        QuizOutcome::Finished => {
            tracing::debug!(%category, played = previous.len(), "quiz finished");
            None
        }
    };

    Ok(Json(PlayResponse {
        success: question.is_some(),
        previous_questions: previous,
        category: category.id(),
        question,
    }))
}
