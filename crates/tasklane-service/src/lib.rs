//! # Tasklane Service
//!
//! Business logic service layer for Tasklane.
//! Contains use cases and application services.

pub mod auth_service;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod project_service;
pub mod task_service;
pub mod user_service;

pub use auth_service::*;
pub use dto::*;
pub use project_service::*;
pub use r#impl::*;
pub use task_service::*;
pub use user_service::*;
