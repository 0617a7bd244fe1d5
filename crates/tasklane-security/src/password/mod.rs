//! Password hashing and verification.

mod hasher;

pub use hasher::PasswordHasher;
