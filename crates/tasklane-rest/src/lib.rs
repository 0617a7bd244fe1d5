//! # Tasklane REST
//!
//! REST API layer using Axum for Tasklane.
//! Provides HTTP endpoints for authentication, projects, tasks, and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
