//! Security primitives for Tasklane.
//!
//! Provides JWT token generation/validation and Argon2id password hashing.
//! Services hash a password exactly once, at registration; login verifies
//! against the stored hash and never re-encodes it.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenProvider};
pub use password::PasswordHasher;
