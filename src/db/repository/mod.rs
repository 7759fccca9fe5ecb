//! Repository Module
//!
//! Row-level CRUD against SQLite. Repositories translate between payload
//! types and rows; id uniqueness and referential integrity stay with the
//! database (AUTOINCREMENT keys, foreign keys ON).

pub mod department;
pub mod employee;
