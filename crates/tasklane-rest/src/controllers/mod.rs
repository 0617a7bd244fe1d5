//! REST API controllers.

pub mod auth_controller;
pub mod health_controller;
pub mod project_controller;
pub mod task_controller;

pub use health_controller::*;
