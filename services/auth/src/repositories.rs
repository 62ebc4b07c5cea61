//! Repositories for database operations

pub mod user;

pub use user::CredentialStore;
