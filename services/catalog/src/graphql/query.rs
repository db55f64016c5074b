//! Query root

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::info;

use crate::{
    error::ApiError,
    models::{Director, Movie, MovieFilter},
    state::AppState,
    validation::validate_pagination,
};

/// Read operations
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single movie, or null when the id is absent or unknown
    async fn movie(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Movie>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        state
            .movie_repository
            .get(&id)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    /// A single director, or null when the id is absent or unknown
    async fn director(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Director>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        state
            .director_repository
            .get(&id)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    /// Movies in store order. Without a limit (or with a limit of 0) the whole
    /// collection is returned, otherwise positions `[offset, offset + limit)`.
    async fn movies(
        &self,
        ctx: &Context<'_>,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<Vec<Movie>> {
        let page = validate_pagination(offset, limit)
            .map_err(|message| ApiError::Validation(message).extend())?;

        let state = ctx.data::<AppState>()?;
        let movies = match page {
            Some((offset, limit)) => {
                info!("Listing movies, offset {} limit {}", offset, limit);
                state.movie_repository.list_page(offset, limit).await
            }
            None => state.movie_repository.list(&MovieFilter::default()).await,
        };

        movies.map_err(|e| ApiError::from(e).extend())
    }

    /// Every director in store order
    async fn directors(&self, ctx: &Context<'_>) -> Result<Vec<Director>> {
        let state = ctx.data::<AppState>()?;
        state
            .director_repository
            .list()
            .await
            .map_err(|e| ApiError::from(e).extend())
    }
}
