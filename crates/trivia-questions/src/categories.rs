//! Category reads. Categories are seeded by migrations and never written
//! through the API.

use rusqlite::{Connection, OptionalExtension, Row};
use trivia_types::Category;

use crate::error::QuestionError;

/// Lists every category ordered by ID.
pub fn list_categories(conn: &Connection) -> Result<Vec<Category>, QuestionError> {
    let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row_to_category)?;
    let mut categories = Vec::new();
    for row in rows {
        categories.push(row?);
    }
    Ok(categories)
}

/// Retrieves a category by ID.
///
/// # Errors
///
/// Returns `QuestionError::CategoryNotFound` if no category has this ID.
pub fn get_category(conn: &Connection, id: i64) -> Result<Category, QuestionError> {
    conn.query_row(
        "SELECT id, type FROM categories WHERE id = ?1",
        [id],
        map_row_to_category,
    )
    .optional()?
    .ok_or(QuestionError::CategoryNotFound(id))
}

fn map_row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        kind: row.get(1)?,
    })
}
