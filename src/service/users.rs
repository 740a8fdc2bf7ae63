//! In-process user registry keyed by email.

use crate::error::AppError;
use crate::models::{User, UserSignIn};
use crate::service::password::{hash_password, verify_password};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Registered users, email to password hash. Lives for the lifetime of the process.
#[derive(Default)]
pub struct UserRegistry {
    by_email: RwLock<HashMap<String, String>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user. Emails are unique. Events sent along with the
    /// sign-up are accepted by the schema but not kept.
    pub async fn sign_up(&self, user: User) -> Result<(), AppError> {
        let User { email, password, .. } = user;
        if self.by_email.read().await.contains_key(&email) {
            return Err(AppError::Conflict("User with supplied username exists".into()));
        }
        let password_hash = run_blocking(move || hash_password(&password)).await?;
        let mut users = self.by_email.write().await;
        // re-check: another sign-up may have won while hashing
        if users.contains_key(&email) {
            return Err(AppError::Conflict("User with supplied username exists".into()));
        }
        tracing::info!(email = %email, "user registered");
        users.insert(email, password_hash);
        Ok(())
    }

    /// Check credentials for an existing user.
    pub async fn sign_in(&self, credentials: UserSignIn) -> Result<(), AppError> {
        let stored_hash = self
            .by_email
            .read()
            .await
            .get(&credentials.email)
            .cloned()
            .ok_or_else(|| AppError::NotFound("User does not exist".into()))?;
        let password = credentials.password;
        let matches = run_blocking(move || verify_password(&password, &stored_hash)).await?;
        if !matches {
            tracing::info!(email = %credentials.email, "sign-in rejected");
            return Err(AppError::Forbidden("Wrong credentials passed".into()));
        }
        Ok(())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, argon2::password_hash::Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("password task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("password hashing: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, password: &str) -> User {
        User {
            email: email.into(),
            password: password.into(),
            events: None,
        }
    }

    fn sign_in(email: &str, password: &str) -> UserSignIn {
        UserSignIn {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn duplicate_sign_up_conflicts() {
        let registry = UserRegistry::new();
        registry.sign_up(user("fastapi@packt.com", "strong!!!")).await.unwrap();
        let err = registry.sign_up(user("fastapi@packt.com", "other")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        // the first registration's password still applies
        registry.sign_in(sign_in("fastapi@packt.com", "strong!!!")).await.unwrap();
        let err = registry.sign_in(sign_in("fastapi@packt.com", "other")).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn sign_in_checks_existence_then_password() {
        let registry = UserRegistry::new();
        let err = registry.sign_in(sign_in("ghost@packt.com", "x")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        registry.sign_up(user("fastapi@packt.com", "strong!!!")).await.unwrap();
        let err = registry.sign_in(sign_in("fastapi@packt.com", "wrong")).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        registry.sign_in(sign_in("fastapi@packt.com", "strong!!!")).await.unwrap();
    }
}
