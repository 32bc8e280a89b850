//! Error types for the query layer.

use trivia_types::QuizCategory;

/// Errors that can occur during question and category operations.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// A database operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No question has this ID.
    #[error("question not found: {0}")]
    NotFound(i64),

    /// No category has this ID.
    #[error("category not found: {0}")]
    CategoryNotFound(i64),

    /// The requested page lies outside the stored question list.
    #[error("page {page} is out of range for {total} questions")]
    PageOutOfRange { page: i64, total: usize },

    /// No question exists for the quiz category at all.
    #[error("no questions available for quiz category {0}")]
    EmptyPool(QuizCategory),
}
