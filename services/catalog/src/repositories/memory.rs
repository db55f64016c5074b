//! In-process entity store
//!
//! Keeps every collection in insertion order behind a single lock, which
//! plays the role the database plays for the PostgreSQL repositories.
//! Used by the test suites and by `STORE=memory` for local development.

use std::sync::Arc;

use axum::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{DirectorRepository, MovieRepository, UserRepository, parse_id};
use crate::models::{
    Director, Movie, MovieFilter, NewDirector, NewMovie, NewUser, UpdateDirector, UpdateMovie,
    User,
};

#[derive(Debug, Default)]
struct Collections {
    movies: Vec<Movie>,
    directors: Vec<Director>,
    users: Vec<User>,
}

/// In-memory store implementing every repository trait
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn position_of<T>(items: &[T], id: &str, key: impl Fn(&T) -> Uuid) -> Option<usize> {
    let id = parse_id(id)?;
    items.iter().position(|item| key(item) == id)
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn get(&self, id: &str) -> DatabaseResult<Option<Movie>> {
        let collections = self.inner.read().await;
        Ok(position_of(&collections.movies, id, |m| m.id).map(|i| collections.movies[i].clone()))
    }

    async fn list(&self, filter: &MovieFilter) -> DatabaseResult<Vec<Movie>> {
        let collections = self.inner.read().await;
        Ok(collections
            .movies
            .iter()
            .filter(|movie| filter.matches(movie))
            .cloned()
            .collect())
    }

    async fn list_page(&self, offset: usize, limit: usize) -> DatabaseResult<Vec<Movie>> {
        let collections = self.inner.read().await;
        Ok(collections
            .movies
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, new_movie: NewMovie) -> DatabaseResult<Movie> {
        info!("Creating new movie: {}", new_movie.name);

        let movie = new_movie.into_movie(Uuid::new_v4(), Utc::now());
        self.inner.write().await.movies.push(movie.clone());
        Ok(movie)
    }

    async fn update_by_id(&self, id: &str, changes: UpdateMovie) -> DatabaseResult<Option<Movie>> {
        let mut collections = self.inner.write().await;
        let Some(index) = position_of(&collections.movies, id, |m| m.id) else {
            return Ok(None);
        };
        info!("Updating movie: {}", id);

        let movie = &mut collections.movies[index];
        movie.apply(changes);
        Ok(Some(movie.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Movie>> {
        let mut collections = self.inner.write().await;
        let Some(index) = position_of(&collections.movies, id, |m| m.id) else {
            return Ok(None);
        };
        info!("Deleting movie: {}", id);

        Ok(Some(collections.movies.remove(index)))
    }
}

#[async_trait]
impl DirectorRepository for MemoryStore {
    async fn get(&self, id: &str) -> DatabaseResult<Option<Director>> {
        let collections = self.inner.read().await;
        Ok(position_of(&collections.directors, id, |d| d.id)
            .map(|i| collections.directors[i].clone()))
    }

    async fn list(&self) -> DatabaseResult<Vec<Director>> {
        Ok(self.inner.read().await.directors.clone())
    }

    async fn create(&self, new_director: NewDirector) -> DatabaseResult<Director> {
        info!("Creating new director: {}", new_director.name);

        let director = new_director.into_director(Uuid::new_v4(), Utc::now());
        self.inner.write().await.directors.push(director.clone());
        Ok(director)
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: UpdateDirector,
    ) -> DatabaseResult<Option<Director>> {
        let mut collections = self.inner.write().await;
        let Some(index) = position_of(&collections.directors, id, |d| d.id) else {
            return Ok(None);
        };
        info!("Updating director: {}", id);

        let director = &mut collections.directors[index];
        director.apply(changes);
        Ok(Some(director.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Director>> {
        let mut collections = self.inner.write().await;
        let Some(index) = position_of(&collections.directors, id, |d| d.id) else {
            return Ok(None);
        };
        info!("Deleting director: {}", id);

        Ok(Some(collections.directors.remove(index)))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        info!("Finding user by email: {}", email);

        let collections = self.inner.read().await;
        Ok(collections
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        let mut collections = self.inner.write().await;
        // mirrors the unique index on users.email
        if collections.users.iter().any(|u| u.email == new_user.email) {
            return Err(DatabaseError::Conflict(format!(
                "email {} already exists",
                new_user.email
            )));
        }

        let user = new_user.into_user(Uuid::new_v4(), Utc::now());
        collections.users.push(user.clone());
        Ok(user)
    }
}
