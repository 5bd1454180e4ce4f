//! Setup code service for bootstrapping the first admin account.
//!
//! Provides the `SetupCodeService` for generating and validating one-time-use
//! setup codes. When the server starts with no admin account in the database,
//! a code is generated and written to the log; registering with that code
//! grants the new account the admin role. Codes are stored in-memory with a
//! 15-minute TTL and are invalidated after successful use or expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 900;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the one-time setup code used for initial admin setup.
///
/// The code is generated once on server startup if no admin account exists,
/// stored in memory with a 15-minute TTL, and invalidated after successful use
/// or expiration. This allows secure initial setup without pre-configured
/// credentials.
#[derive(Clone)]
pub struct SetupCodeService {
    /// The currently active setup code, if any.
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random setup code and stores it, replacing any
    /// previously generated code.
    ///
    /// # Returns
    /// - `String` - The generated 32-character setup code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let setup_code = SetupCode::new(code_string.clone());
        *self.code.write().await = Some(setup_code);
        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// If validation is successful the code is invalidated to prevent reuse
    /// (one-time-use). Expired codes are also invalidated and fail validation.
    ///
    /// # Returns
    /// - `true` - Code matches and was valid, code has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a cryptographically secure random alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a setup code currently exists and is valid (not expired).
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests generating a new setup code.
    ///
    /// Expected: 32-character code and valid code state afterwards
    #[tokio::test]
    async fn test_generate_code() {
        let service = SetupCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(service.has_valid_code().await);
    }

    /// Tests that a correct code validates exactly once.
    ///
    /// Expected: first validation succeeds and consumes the code, second fails
    #[tokio::test]
    async fn test_code_is_single_use() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests that a wrong code fails and does not consume the stored code.
    ///
    /// Expected: wrong input rejected, correct code still usable afterwards
    #[tokio::test]
    async fn test_wrong_code_is_rejected() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("not-the-code").await);
        assert!(service.validate_and_consume(&code).await);
    }

    /// Tests that regenerating replaces the previous code.
    ///
    /// Expected: old code rejected after regeneration, new code accepted
    #[tokio::test]
    async fn test_regenerate_replaces_code() {
        let service = SetupCodeService::new();
        let old_code = service.generate().await;
        let new_code = service.generate().await;

        assert!(!service.validate_and_consume(&old_code).await);
        assert!(service.validate_and_consume(&new_code).await);
    }
}
