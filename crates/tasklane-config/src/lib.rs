//! # Tasklane Config
//!
//! Configuration management for Tasklane. Supports layered configuration
//! from files and environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
