//! User repository backed by PostgreSQL

use axum::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use super::UserRepository;
use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        info!("Finding user by email: {}", email);

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, is_admin, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn create(&self, new_user: NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, is_admin)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, is_admin, created_at
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }
}
