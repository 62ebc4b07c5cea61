//! Repositories for database operations

pub mod goal;
pub mod project;
pub mod task;

pub use goal::GoalTracker;
pub use project::ProjectRegistry;
pub use task::TaskList;
