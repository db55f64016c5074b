//! Movie repository backed by PostgreSQL

use axum::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use super::{MovieRepository, parse_id};
use crate::models::{Movie, MovieFilter, NewMovie, UpdateMovie};

/// Movie repository for database operations
#[derive(Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    /// Create a new movie repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn get(&self, id: &str) -> DatabaseResult<Option<Movie>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, name, genre, rate, year, img_src, trailer_id, description,
                   director_id, created_at
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn list(&self, filter: &MovieFilter) -> DatabaseResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, name, genre, rate, year, img_src, trailer_id, description,
                   director_id, created_at
            FROM movies
            WHERE ($1::TEXT IS NULL OR director_id = $1)
            ORDER BY created_at, id
            "#,
        )
        .bind(filter.director_id.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn list_page(&self, offset: usize, limit: usize) -> DatabaseResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, name, genre, rate, year, img_src, trailer_id, description,
                   director_id, created_at
            FROM movies
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn create(&self, new_movie: NewMovie) -> DatabaseResult<Movie> {
        info!("Creating new movie: {}", new_movie.name);

        sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (name, genre, rate, year, img_src, trailer_id, description, director_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, genre, rate, year, img_src, trailer_id, description,
                      director_id, created_at
            "#,
        )
        .bind(&new_movie.name)
        .bind(&new_movie.genre)
        .bind(new_movie.rate)
        .bind(new_movie.year)
        .bind(&new_movie.img_src)
        .bind(&new_movie.trailer_id)
        .bind(&new_movie.description)
        .bind(&new_movie.director_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn update_by_id(&self, id: &str, changes: UpdateMovie) -> DatabaseResult<Option<Movie>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        info!("Updating movie: {}", id);

        sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET name = $2, genre = $3, rate = $4, year = $5, img_src = $6,
                director_id = CASE WHEN $8 THEN $7 ELSE director_id END
            WHERE id = $1
            RETURNING id, name, genre, rate, year, img_src, trailer_id, description,
                      director_id, created_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.genre)
        .bind(changes.rate)
        .bind(changes.year)
        .bind(&changes.img_src)
        .bind(changes.director_id.clone().flatten())
        .bind(changes.director_id.is_some())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Movie>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        info!("Deleting movie: {}", id);

        sqlx::query_as::<_, Movie>(
            r#"
            DELETE FROM movies
            WHERE id = $1
            RETURNING id, name, genre, rate, year, img_src, trailer_id, description,
                      director_id, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }
}
