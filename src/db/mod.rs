//! Database module: row models, schema and the SQLite-backed storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pooled storage with one method per statement

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Experience, PersonalInfo, Project, Skill};
pub use schema::SQLITE_INIT;
pub use sqlite::{PortfolioStorage, SqlitePool};
