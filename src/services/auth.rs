//! Authentication service: registration, login, token revocation

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{User, UserClaims},
    repository::Repository,
};

/// Identifiers of revoked tokens, keyed to each token's own expiry so the
/// sweeper can evict entries that would no longer validate anyway. Guarded
/// by a mutex; critical sections are a single map operation.
#[derive(Debug, Default)]
pub struct RevocationStore {
    revoked: Mutex<HashMap<String, i64>>,
}

impl RevocationStore {
    /// Mark a token identifier as revoked. Revoking twice is a no-op.
    pub fn revoke(&self, jti: &str, exp: i64) {
        self.revoked
            .lock()
            .expect("revocation store lock poisoned")
            .insert(jti.to_string(), exp);
    }

    /// Check whether a token identifier has been revoked
    pub fn is_revoked(&self, jti: &str) -> bool {
        self.revoked
            .lock()
            .expect("revocation store lock poisoned")
            .contains_key(jti)
    }

    /// Evict entries whose token expired before `now`; returns how many
    /// entries were removed
    pub fn sweep(&self, now: i64) -> usize {
        let mut revoked = self
            .revoked
            .lock()
            .expect("revocation store lock poisoned");
        let before = revoked.len();
        revoked.retain(|_, exp| *exp > now);
        before - revoked.len()
    }

    pub fn len(&self) -> usize {
        self.revoked
            .lock()
            .expect("revocation store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
    revoked: Arc<RevocationStore>,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self {
            repository,
            config,
            revoked: Arc::new(RevocationStore::default()),
        }
    }

    /// Register a new user; fails with Conflict if the username is taken
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        if self.repository.users.username_exists(username).await? {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = self.hash_password(password)?;
        self.repository.users.create(username, &password_hash).await
    }

    /// Authenticate by username and password and issue a JWT token
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Invalid username or password".to_string())
            })?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let exp = now + self.config.jwt_expiration_hours as i64 * 3600;

        let claims = UserClaims {
            sub: user.username.clone(),
            user_id: user.id,
            jti: Uuid::new_v4().to_string(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Revoke the token behind the given claims. Repeated calls with the
    /// same token are no-ops.
    pub fn logout(&self, claims: &UserClaims) {
        self.revoked.revoke(&claims.jti, claims.exp);
    }

    /// Check whether a token identifier has been revoked
    pub fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.is_revoked(jti)
    }

    /// Evict revocation entries for tokens that have expired on their own
    pub fn sweep_revoked(&self) -> usize {
        self.revoked.sweep(Utc::now().timestamp())
    }

    /// Verify a password against the stored hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2 with a fresh salt
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoked_token_is_reported_revoked() {
        let store = RevocationStore::default();
        assert!(!store.is_revoked("a"));

        store.revoke("a", 100);
        assert!(store.is_revoked("a"));
        assert!(!store.is_revoked("b"));
    }

    #[test]
    fn revoking_twice_keeps_a_single_entry() {
        let store = RevocationStore::default();
        store.revoke("a", 100);
        store.revoke("a", 100);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sweep_evicts_only_expired_entries() {
        let store = RevocationStore::default();
        store.revoke("expired", 50);
        store.revoke("still-valid", 200);

        let evicted = store.sweep(100);
        assert_eq!(evicted, 1);
        assert!(!store.is_revoked("expired"));
        assert!(store.is_revoked("still-valid"));
    }

    #[test]
    fn sweep_on_empty_store_is_a_no_op() {
        let store = RevocationStore::default();
        assert_eq!(store.sweep(100), 0);
        assert!(store.is_empty());
    }
}
