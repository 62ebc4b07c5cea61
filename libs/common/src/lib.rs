//! Common library for the Wordsmith application
//!
//! This crate provides shared functionality used across the Wordsmith
//! services: SQLite connectivity, schema migrations and database error
//! handling.

pub mod database;
pub mod error;
