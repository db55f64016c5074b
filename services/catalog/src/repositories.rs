//! Repositories for database operations
//!
//! Each entity gets a repository trait with a PostgreSQL implementation.
//! [`memory::MemoryStore`] implements all of them in process for tests and
//! local development.

use axum::async_trait;
use common::error::DatabaseResult;
use uuid::Uuid;

use crate::models::{
    Director, Movie, MovieFilter, NewDirector, NewMovie, NewUser, UpdateDirector, UpdateMovie,
    User,
};

pub mod director;
pub mod memory;
pub mod movie;
pub mod user;

pub use director::PgDirectorRepository;
pub use memory::MemoryStore;
pub use movie::PgMovieRepository;
pub use user::PgUserRepository;

/// Parse an opaque id. Anything that is not a store-issued id cannot match a
/// record, so callers treat `None` as not found.
pub fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

/// Movie repository
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find a movie by ID
    async fn get(&self, id: &str) -> DatabaseResult<Option<Movie>>;

    /// List the movies matching a filter, in store order
    async fn list(&self, filter: &MovieFilter) -> DatabaseResult<Vec<Movie>>;

    /// List the movies at positions `[offset, offset + limit)` in store order
    async fn list_page(&self, offset: usize, limit: usize) -> DatabaseResult<Vec<Movie>>;

    /// Create a new movie
    async fn create(&self, new_movie: NewMovie) -> DatabaseResult<Movie>;

    /// Update a movie, returning the post-update record
    async fn update_by_id(&self, id: &str, changes: UpdateMovie) -> DatabaseResult<Option<Movie>>;

    /// Delete a movie, returning the removed record
    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Movie>>;

    /// List the movies that reference a director
    async fn list_by_director_id(&self, director_id: &str) -> DatabaseResult<Vec<Movie>> {
        self.list(&MovieFilter::by_director(director_id)).await
    }
}

/// Director repository
#[async_trait]
pub trait DirectorRepository: Send + Sync {
    /// Find a director by ID
    async fn get(&self, id: &str) -> DatabaseResult<Option<Director>>;

    /// List every director, in store order
    async fn list(&self) -> DatabaseResult<Vec<Director>>;

    /// Create a new director
    async fn create(&self, new_director: NewDirector) -> DatabaseResult<Director>;

    /// Update a director, returning the post-update record
    async fn update_by_id(
        &self,
        id: &str,
        changes: UpdateDirector,
    ) -> DatabaseResult<Option<Director>>;

    /// Delete a director, returning the removed record
    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Director>>;
}

/// User repository
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>>;

    /// Create a new user. Fails with a conflict when the email is taken.
    async fn create(&self, new_user: NewUser) -> DatabaseResult<User>;
}
