//! Question reads and writes.

use rusqlite::{params, Connection, OptionalExtension, Row};
use trivia_types::{page_window, NewQuestion, Question};

use crate::error::QuestionError;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// One page of the question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    /// The questions on this page, in insertion order.
    pub questions: Vec<Question>,
    /// Number of stored questions across all pages.
    pub total: usize,
}

/// Lists every question in insertion order.
pub fn list_questions(conn: &Connection) -> Result<Vec<Question>, QuestionError> {
    query_questions(
        conn,
        &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id ASC"),
        [],
    )
}

/// Returns the questions shown on a 1-based `page`, plus the overall total.
///
/// # Errors
///
/// Returns `QuestionError::PageOutOfRange` when the page holds no
/// questions, which includes every `page < 1`.
pub fn list_questions_page(conn: &Connection, page: i64) -> Result<QuestionPage, QuestionError> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
    let total = usize::try_from(total).unwrap_or_default();

    let window = page_window(page, total).ok_or(QuestionError::PageOutOfRange { page, total })?;

    let questions = query_questions(
        conn,
        &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id ASC LIMIT ?1 OFFSET ?2"),
        params![window.len() as i64, window.start as i64],
    )?;

    Ok(QuestionPage { questions, total })
}

/// Retrieves a question by ID.
///
/// # Errors
///
/// Returns `QuestionError::NotFound` if no question has this ID.
#[cfg(test)]
pub(crate) fn get_question(conn: &Connection, id: i64) -> Result<Question, QuestionError> {
    conn.query_row(
        &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
        [id],
        map_row_to_question,
    )
    .optional()?
    .ok_or(QuestionError::NotFound(id))
}

/// Stores a new question and returns it with its assigned ID.
///
/// The category is stored as given; it is not checked against the
/// categories table.
pub fn create_question(conn: &Connection, new: &NewQuestion) -> Result<Question, QuestionError> {
    let question = conn.query_row(
        &format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {QUESTION_COLUMNS}"
        ),
        params![new.question, new.answer, new.category, new.difficulty],
        map_row_to_question,
    )?;

    tracing::debug!(
        question_id = question.id,
        category = question.category,
        "question created"
    );
    Ok(question)
}

/// Deletes a question and returns the removed record.
///
/// # Errors
///
/// Returns `QuestionError::NotFound` if no question has this ID, including
/// when it was already deleted.
pub fn delete_question(conn: &Connection, id: i64) -> Result<Question, QuestionError> {
    let deleted = conn
        .query_row(
            &format!("DELETE FROM questions WHERE id = ?1 RETURNING {QUESTION_COLUMNS}"),
            [id],
            map_row_to_question,
        )
        .optional()?
        .ok_or(QuestionError::NotFound(id))?;

    tracing::debug!(question_id = id, "question deleted");
    Ok(deleted)
}

/// Finds questions whose text contains `term`, ignoring case.
///
/// Case folding is Unicode-aware, so `"école"` matches `"ÉCOLE"`. The term
/// is matched literally and an empty term matches every question.
pub fn search_questions(conn: &Connection, term: &str) -> Result<Vec<Question>, QuestionError> {
    let needle = term.to_lowercase();
    let mut questions = list_questions(conn)?;
    questions.retain(|q| q.question.to_lowercase().contains(&needle));
    Ok(questions)
}

/// Lists the questions filed under `category_id`, in insertion order.
pub fn questions_in_category(
    conn: &Connection,
    category_id: i64,
) -> Result<Vec<Question>, QuestionError> {
    query_questions(
        conn,
        &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id ASC"),
        [category_id],
    )
}

fn query_questions<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Question>, QuestionError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row_to_question)?;
    let mut questions = Vec::new();
    for row in rows {
        questions.push(row?);
    }
    Ok(questions)
}

pub(crate) fn map_row_to_question(row: &Row) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

