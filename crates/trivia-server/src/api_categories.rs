//! Category API handlers.

use crate::api::{with_conn, ApiError};
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use trivia_questions::{get_category, list_categories, questions_in_category};
use trivia_types::{Category, Question};

/// Response body for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// Response body for `GET /categories/{id}`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// GET /categories
pub async fn list_categories_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = with_conn(&state, |conn| Ok(list_categories(conn)?)).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}
///
/// Lists the questions filed under an existing category. A category ID
/// that is missing or not an integer is a 404.
pub async fn category_questions_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) = path.map_err(|e| ApiError::NotFound(e.body_text()))?;

    let questions = with_conn(&state, move |conn| {
        get_category(conn, category_id)?;
        Ok(questions_in_category(conn, category_id)?)
    })
    .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
