//! Postgres-backed repository implementations.

mod project_repository;
mod task_repository;
mod user_repository;

pub use project_repository::PgProjectRepository;
pub use task_repository::PgTaskRepository;
pub use user_repository::PgUserRepository;
