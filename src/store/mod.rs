//! Store Module
//!
//! Generic key-value persistence behind the [`crate::types::KvStore`]
//! trait: SQLite on disk, in-memory for tests.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
