//! # Board Core
//!
//! The domain layer of the Corkboard bulletin board.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod auth;
pub mod domain;
pub mod error;
pub mod ports;
pub mod repo;

pub use error::{DomainError, StoreError};
