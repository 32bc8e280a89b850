//! Question API handlers: paginated list, search, add, delete.

use crate::api::{with_conn, ApiError};
use crate::AppState;
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Extension, Json, Path, Query,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use trivia_questions::{
    create_question, delete_question, list_categories, list_questions_page, search_questions,
};
use trivia_types::{NewQuestion, Question};

/// Query string for `GET /questions`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested page. Absent or non-integer values mean page 1.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Request body for `POST /questions`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response body for `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Category ID to label.
    pub categories: BTreeMap<i64, String>,
    /// Always `null`: the full list is not scoped to a category.
    pub current_category: Option<i64>,
}

/// Response body for `POST /questions`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
}

/// Response body for `POST /add` and `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: Question,
}

/// GET /questions?page=N
pub async fn list_questions_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = params.page();

    let (page, categories) = with_conn(&state, move |conn| {
        let page = list_questions_page(conn, page)?;
        let categories: BTreeMap<i64, String> = list_categories(conn)?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect();
        Ok((page, categories))
    })
    .await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total,
        categories,
        current_category: None,
    }))
}

/// POST /questions
///
/// Case-insensitive substring search over question text.
pub async fn search_questions_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let questions = with_conn(&state, move |conn| {
        Ok(search_questions(conn, &request.search_term)?)
    })
    .await?;

    tracing::debug!(results = questions.len(), "question search completed");

    Ok(Json(SearchResponse {
        success: true,
        questions,
    }))
}

/// POST /add
pub async fn add_question_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(new_question) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let question = with_conn(&state, move |conn| Ok(create_question(conn, &new_question)?)).await?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        "question added"
    );

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// DELETE /questions/{id}
///
/// A missing question is reported as 422, not 404.
pub async fn delete_question_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Path(question_id) = path.map_err(|e| ApiError::NotFound(e.body_text()))?;

    let question = with_conn(&state, move |conn| Ok(delete_question(conn, question_id)?)).await?;

    tracing::info!(question_id, "question deleted");

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}
