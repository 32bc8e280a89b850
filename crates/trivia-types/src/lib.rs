//! Shared types and constants for the Trivia API.
//!
//! This crate provides the record types exchanged between the query layer
//! and the HTTP handlers (`Question`, `NewQuestion`, `Category`), the quiz
//! category selector, and the pagination window used by the question list.
//!
//! No crate in the workspace depends on anything *except* `trivia-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

use serde::{Deserialize, Deserializer, Serialize};

mod page;
pub use page::{page_window, QUESTIONS_PER_PAGE};

/// A stored quiz item.
///
/// Serialises to the formatted representation returned by every endpoint:
/// `{"id", "question", "answer", "category", "difficulty"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned primary key.
    pub id: i64,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// ID of the category this question belongs to. Not verified against
    /// the categories table.
    pub category: i64,
    /// Difficulty score.
    pub difficulty: i64,
}

/// A question that has not been stored yet.
///
/// `category` and `difficulty` accept either JSON integers or strings that
/// hold integers, since quiz front-ends commonly post form values as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient_int")]
    pub category: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub difficulty: i64,
}

/// A labelled grouping of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Primary key.
    pub id: i64,
    /// Display label, e.g. `"Science"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The category a quiz draws its questions from.
///
/// On the wire this is a plain category ID where `0` means every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizCategory {
    /// Draw from every stored question.
    All,
    /// Draw only from questions whose `category` equals this ID.
    Only(i64),
}

impl QuizCategory {
    /// Converts a wire ID into a selector.
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Only(id)
        }
    }

    /// Returns the wire ID for this selector.
    pub fn id(self) -> i64 {
        match self {
            Self::All => 0,
            Self::Only(id) => id,
        }
    }
}

impl std::fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

/// Deserialises an `i64` from either a JSON integer or an integer string.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_serialises_label_as_type() {
        let category = Category {
            id: 1,
            kind: "Science".to_string(),
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn new_question_accepts_string_integers() {
        let parsed: NewQuestion = serde_json::from_value(json!({
            "question": "new question",
            "answer": "OK",
            "difficulty": 2,
            "category": "6"
        }))
        .unwrap();
        assert_eq!(parsed.category, 6);
        assert_eq!(parsed.difficulty, 2);
    }

    #[test]
    fn new_question_rejects_missing_field() {
        let result: Result<NewQuestion, _> = serde_json::from_value(json!({
            "question": "new question",
            "answer": "OK",
            "category": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn new_question_rejects_non_numeric_category() {
        let result: Result<NewQuestion, _> = serde_json::from_value(json!({
            "question": "q",
            "answer": "a",
            "category": "science",
            "difficulty": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn quiz_category_zero_means_all() {
        assert_eq!(QuizCategory::from_id(0), QuizCategory::All);
        assert_eq!(QuizCategory::from_id(4), QuizCategory::Only(4));
        assert_eq!(QuizCategory::All.id(), 0);
        assert_eq!(QuizCategory::Only(4).id(), 4);
    }
}
