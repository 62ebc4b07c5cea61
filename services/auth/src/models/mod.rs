//! Authentication models

pub mod session;
pub mod user;

// Re-export for convenience
pub use session::{Session, SessionRecord};
pub use user::{User, UserId};
