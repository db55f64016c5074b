//! Director repository backed by PostgreSQL

use axum::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use super::{DirectorRepository, parse_id};
use crate::models::{Director, NewDirector, UpdateDirector};

/// Director repository for database operations
#[derive(Clone)]
pub struct PgDirectorRepository {
    pool: PgPool,
}

impl PgDirectorRepository {
    /// Create a new director repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectorRepository for PgDirectorRepository {
    async fn get(&self, id: &str) -> DatabaseResult<Option<Director>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        sqlx::query_as::<_, Director>(
            r#"
            SELECT id, name, age, img_src, born, born_place, career, genres, height,
                   imdb_src, movies_count, movies_years, created_at
            FROM directors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn list(&self) -> DatabaseResult<Vec<Director>> {
        sqlx::query_as::<_, Director>(
            r#"
            SELECT id, name, age, img_src, born, born_place, career, genres, height,
                   imdb_src, movies_count, movies_years, created_at
            FROM directors
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn create(&self, new_director: NewDirector) -> DatabaseResult<Director> {
        info!("Creating new director: {}", new_director.name);

        sqlx::query_as::<_, Director>(
            r#"
            INSERT INTO directors (name, age, img_src, born, born_place, career, genres,
                                   height, imdb_src, movies_count, movies_years)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, age, img_src, born, born_place, career, genres, height,
                      imdb_src, movies_count, movies_years, created_at
            "#,
        )
        .bind(&new_director.name)
        .bind(new_director.age)
        .bind(&new_director.img_src)
        .bind(&new_director.born)
        .bind(&new_director.born_place)
        .bind(&new_director.career)
        .bind(&new_director.genres)
        .bind(new_director.height)
        .bind(&new_director.imdb_src)
        .bind(new_director.movies_count)
        .bind(&new_director.movies_years)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: UpdateDirector,
    ) -> DatabaseResult<Option<Director>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        info!("Updating director: {}", id);

        sqlx::query_as::<_, Director>(
            r#"
            UPDATE directors
            SET name = $2, age = $3, img_src = $4
            WHERE id = $1
            RETURNING id, name, age, img_src, born, born_place, career, genres, height,
                      imdb_src, movies_count, movies_years, created_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.age)
        .bind(&changes.img_src)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Director>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        info!("Deleting director: {}", id);

        sqlx::query_as::<_, Director>(
            r#"
            DELETE FROM directors
            WHERE id = $1
            RETURNING id, name, age, img_src, born, born_place, career, genres, height,
                      imdb_src, movies_count, movies_years, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }
}
