//! Password hashing with Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};
use std::sync::Arc;
use tasklane_core::{TasklaneError, TasklaneResult};

/// Password hashing service backed by Argon2id.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a hasher with the library default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            argon2: Arc::new(Argon2::default()),
        }
    }

    /// Creates a hasher with explicit Argon2 parameters.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> TasklaneResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            TasklaneError::Configuration(format!("Invalid Argon2 parameters: {}", e))
        })?;

        Ok(Self {
            argon2: Arc::new(Argon2::new(
                argon2::Algorithm::Argon2id,
                argon2::Version::V0x13,
                params,
            )),
        })
    }

    /// Creates a hasher from a memory cost given in MiB.
    pub fn with_cost(cost_mib: u32) -> TasklaneResult<Self> {
        Self::with_params(cost_mib * 1024, 3, 1)
    }

    /// Hashes a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> TasklaneResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TasklaneError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verifies a password against a stored hash.
    ///
    /// Returns `Ok(false)` on a mismatch; only malformed hashes error.
    pub fn verify(&self, password: &str, hash: &str) -> TasklaneResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| TasklaneError::Internal(format!("Invalid password hash: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(TasklaneError::Internal(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}
