//! Repository layer for database operations.
//!
//! Repositories own every SQL statement and every transaction boundary;
//! services above them never touch the pool directly.

pub mod user_repository;

pub use user_repository::UserRepository;
