//! Application state shared across resolvers

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    auth::AuthService,
    jwt::JwtService,
    repositories::{
        DirectorRepository, MemoryStore, MovieRepository, PgDirectorRepository,
        PgMovieRepository, PgUserRepository,
    },
};

/// Application state shared across resolvers
///
/// Built once at startup and attached to the GraphQL schema as context data.
#[derive(Clone)]
pub struct AppState {
    pub movie_repository: Arc<dyn MovieRepository>,
    pub director_repository: Arc<dyn DirectorRepository>,
    pub auth_service: AuthService,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            movie_repository: Arc::new(PgMovieRepository::new(pool.clone())),
            director_repository: Arc::new(PgDirectorRepository::new(pool.clone())),
            auth_service: AuthService::new(Arc::new(PgUserRepository::new(pool)), jwt_service),
        }
    }

    /// State backed by a fresh in-process store
    pub fn in_memory(jwt_service: JwtService) -> Self {
        let store = MemoryStore::new();
        Self {
            movie_repository: Arc::new(store.clone()),
            director_repository: Arc::new(store.clone()),
            auth_service: AuthService::new(Arc::new(store), jwt_service),
        }
    }
}
