//! Data transfer objects.

mod auth_dto;
mod project_dto;
mod task_dto;

pub use auth_dto::{LoginRequest, RegisterRequest, TokenResponse};
pub use project_dto::{ProgressResponse, ProjectRequest, ProjectResponse};
pub use task_dto::{TaskRequest, TaskResponse};
