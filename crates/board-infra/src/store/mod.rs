//! Storage backends.
//!
//! Two interchangeable strategies behind the same port contracts: a
//! flat-file JSON store and a SQLite table store. The composition root
//! picks one at startup and hands it to the repositories.

pub mod json_file;
pub mod seed;
pub mod sqlite;

pub mod entity;

pub use json_file::{JsonPostStore, JsonUserStore};
pub use sqlite::{SqliteConfig, SqlitePostStore, SqliteUserStore};

#[cfg(test)]
mod tests;
