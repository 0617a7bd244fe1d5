//! # Tasklane Repository
//!
//! Data access layer: repository trait definitions plus the Postgres/SQLx
//! implementations services are wired against.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository / ProjectRepository / TaskRepository>
//! PgUserRepository / PgProjectRepository / PgTaskRepository
//!   ↓  Arc<DatabasePool>
//! Postgres
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs        ← DatabasePool (connect, health check, migrations)
//!   traits.rs      ← repository traits
//!   postgres/      ← SQLx-backed implementations
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::{create_pool, DatabasePool};
pub use postgres::{PgProjectRepository, PgTaskRepository, PgUserRepository};
pub use traits::{ProjectRepository, TaskRepository, UserRepository};
