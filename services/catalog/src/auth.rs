//! Sign-up and login
//!
//! Passwords are hashed with Argon2 on the blocking pool. A successful login
//! issues a bearer credential; there is no server-side session.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use common::error::DatabaseError;
use tracing::{error, info, warn};

use crate::{
    error::{ApiError, ApiResult},
    jwt::JwtService,
    models::{NewUser, User},
    repositories::UserRepository,
    validation::{validate_email, validate_password},
};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginSession {
    /// `Bearer <credential>`
    pub token: String,
    pub user: User,
}

/// Hash a password with a fresh random salt
pub async fn hash_password(password: &str) -> ApiResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut rand::thread_rng());
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| {
        error!("Password hashing task failed: {}", e);
        ApiError::PasswordHashing
    })?
    .map_err(|e| {
        error!("Failed to hash password: {}", e);
        ApiError::PasswordHashing
    })
}

/// Check a password against a stored hash
pub async fn verify_password(password: &str, stored_hash: &str) -> ApiResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&stored_hash)?;
        Ok::<_, argon2::password_hash::Error>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
        )
    })
    .await
    .map_err(|e| {
        error!("Password verification task failed: {}", e);
        ApiError::PasswordHashing
    })?
    .map_err(|e| {
        error!("Failed to parse password hash: {}", e);
        ApiError::PasswordHashing
    })
}

/// Authentication operations over the user store
#[derive(Clone)]
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    jwt_service: JwtService,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(user_repository: Arc<dyn UserRepository>, jwt_service: JwtService) -> Self {
        Self {
            user_repository,
            jwt_service,
        }
    }

    /// Token service used to sign credentials
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Register a new account. Every account is an admin.
    pub async fn sign_up(&self, email: &str, password: &str) -> ApiResult<User> {
        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;
        info!("Sign-up attempt for: {}", email);

        if self.user_repository.find_by_email(email).await?.is_some() {
            warn!("Sign-up rejected, email already taken: {}", email);
            return Err(ApiError::DuplicateEmail);
        }

        let password_hash = hash_password(password).await?;
        let new_user = NewUser {
            email: email.to_string(),
            password_hash,
            is_admin: true,
        };

        // a concurrent sign-up can pass the check above; the store has the final word
        self.user_repository
            .create(new_user)
            .await
            .map_err(|e| match e {
                DatabaseError::Conflict(_) => ApiError::DuplicateEmail,
                other => ApiError::Database(other),
            })
    }

    /// Check credentials and issue a bearer credential
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginSession> {
        validate_email(email).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;
        info!("Login attempt for: {}", email);

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login rejected, unknown email: {}", email);
                ApiError::UserNotFound
            })?;

        if !verify_password(password, &user.password_hash).await? {
            warn!("Login rejected, wrong password for: {}", email);
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.jwt_service.generate_token(&user).map_err(|e| {
            error!("Failed to generate token: {}", e);
            ApiError::Token
        })?;

        info!(
            "Issued credential for {}, valid for {}s",
            email,
            self.jwt_service.token_expiry()
        );

        Ok(LoginSession {
            token: format!("Bearer {}", token),
            user,
        })
    }
}
