//! Question and category queries for the Trivia API.
//!
//! Implements every read and write the HTTP layer performs against the
//! store: category listing and lookup, the paginated question list,
//! case-insensitive substring search, per-category listing, insert, delete,
//! and random question selection for the quiz flow.
//!
//! All functions take a borrowed `rusqlite::Connection` so callers decide
//! where the connection comes from (a pooled connection in the server, an
//! in-memory database in tests).

mod categories;
mod error;
mod questions;
mod quiz;

pub use categories::{get_category, list_categories};
pub use error::QuestionError;
pub use questions::{
    create_question, delete_question, list_questions, list_questions_page, questions_in_category,
    search_questions, QuestionPage,
};
pub use quiz::{choose_unseen, next_quiz_question, quiz_pool, QuizOutcome};
