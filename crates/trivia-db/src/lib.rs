//! Database layer for the Trivia API.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! and embedded SQL migrations. The `categories` and `questions` tables are
//! created through versioned migrations managed by this crate, and the
//! default category set is seeded the same way.

mod migrations;
mod pool;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
