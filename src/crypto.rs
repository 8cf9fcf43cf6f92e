// src/crypto.rs
use argon2::{
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, PasswordHasher, Version,
};
use rand_core::OsRng;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Argon2 error: {0}")]
    Argon2Error(String),

    #[error("Invalid KDF parameters: {0}")]
    InvalidParams(String),

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// One-way transform from a submitted password to the stored credential.
pub trait Hasher: Send + Sync {
    fn make(&self, plain: &str) -> Result<String>;

    fn check(&self, plain: &str, hashed: &str) -> Result<bool>;
}

/// Argon2id hasher producing PHC strings with a fresh salt per call.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            memory_cost: 65536, // 64 MB
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Hasher {
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self { memory_cost, time_cost, parallelism }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.kdf_memory_cost, config.kdf_time_cost, config.kdf_parallelism)
    }

    fn argon2(&self) -> Result<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| CryptoError::InvalidParams(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Hasher for Argon2Hasher {
    fn make(&self, plain: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2()?
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| CryptoError::Argon2Error(e.to_string()))?;

        Ok(password_hash.to_string())
    }

    fn check(&self, plain: &str, hashed: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hashed)
            .map_err(|e| CryptoError::InvalidFormat(e.to_string()))?;

        match self.argon2()?.verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CryptoError::HashingError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small parameters keep the tests fast
    fn cheap_hasher() -> Argon2Hasher {
        Argon2Hasher::new(1024, 1, 1)
    }

    #[test]
    fn test_make_produces_argon2id_phc_string() {
        let hashed = cheap_hasher().make("secret123").unwrap();

        assert!(hashed.starts_with("$argon2id$v=19$"));
        assert!(!hashed.contains("secret123"));
    }

    #[test]
    fn test_make_salts_every_call() {
        let hasher = cheap_hasher();
        let first = hasher.make("secret123").unwrap();
        let second = hasher.make("secret123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_check_accepts_original_and_rejects_other() {
        let hasher = cheap_hasher();
        let hashed = hasher.make("secret123").unwrap();

        assert!(hasher.check("secret123", &hashed).unwrap());
        assert!(!hasher.check("secret124", &hashed).unwrap());
    }

    #[test]
    fn test_check_rejects_malformed_hash() {
        let result = cheap_hasher().check("secret123", "not-a-phc-string");
        assert!(matches!(result, Err(CryptoError::InvalidFormat(_))));
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let result = Argon2Hasher::new(1, 0, 0).make("secret123");
        assert!(matches!(result, Err(CryptoError::InvalidParams(_))));
    }
}
