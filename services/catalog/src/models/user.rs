//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// New user creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl NewUser {
    /// Materialize the payload as a stored user
    pub fn into_user(self, id: Uuid, created_at: DateTime<Utc>) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            created_at,
        }
    }
}
