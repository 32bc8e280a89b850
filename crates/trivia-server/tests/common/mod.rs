//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot
use trivia_db::{create_pool, run_migrations, DbPool, DbRuntimeSettings};
use trivia_server::{app, AppState};

/// A router over a fresh, migrated database file.
///
/// The database lives in a temp directory so every pooled connection sees
/// the same data; keep `_dir` alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    _dir: TempDir,
}

pub fn setup_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("trivia.db");
    let pool = create_pool(path.to_str().unwrap(), DbRuntimeSettings::default()).unwrap();
    {
        let conn = pool.get().unwrap();
        run_migrations(&conn).unwrap();
    }

    TestApp {
        router: app(AppState { pool: pool.clone() }),
        pool,
        _dir: dir,
    }
}

/// Inserts a question directly and returns its ID.
pub fn seed_question(pool: &DbPool, question: &str, category: i64) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, 'answer', ?2, 1) RETURNING id",
        rusqlite::params![question, category],
        |row| row.get(0),
    )
    .unwrap()
}

/// Inserts `count` questions cycling through categories 1..=6.
pub fn seed_questions(pool: &DbPool, count: usize) -> Vec<i64> {
    (0..count)
        .map(|i| seed_question(pool, &format!("Question number {i}"), (i % 6 + 1) as i64))
        .collect()
}

pub fn question_exists(pool: &DbPool, id: i64) -> bool {
    let conn = pool.get().unwrap();
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM questions WHERE id = ?1)",
        [id],
        |row| row.get(0),
    )
    .unwrap()
}

impl TestApp {
    /// Sends a request and returns the status and parsed JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Asserts the uniform error envelope.
pub fn assert_envelope(status: StatusCode, json: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code, "unexpected status, body: {json}");
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], code);
    assert_eq!(json["message"], message);
}
