//! Mutation root

use async_graphql::{Context, ErrorExtensions, ID, MaybeUndefined, Object, Result};

use crate::{
    error::ApiError,
    graphql::types::AuthPayload,
    models::{Director, Movie, NewDirector, NewMovie, UpdateDirector, UpdateMovie},
    state::AppState,
};

/// Write operations
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[allow(clippy::too_many_arguments)]
    async fn add_director(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
        img_src: String,
        born: Option<String>,
        born_place: Option<String>,
        career: Option<String>,
        genres: Option<String>,
        height: Option<f64>,
        imdb_src: Option<String>,
        movies_count: Option<i32>,
        movies_years: Option<String>,
    ) -> Result<Director> {
        let new_director = NewDirector {
            name,
            age,
            img_src,
            born,
            born_place,
            career,
            genres,
            height,
            imdb_src,
            movies_count,
            movies_years,
        };

        let state = ctx.data::<AppState>()?;
        state
            .director_repository
            .create(new_director)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    #[allow(clippy::too_many_arguments)]
    async fn add_movie(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        rate: f64,
        year: i32,
        img_src: String,
        trailer_id: String,
        description: String,
        director_id: Option<String>,
    ) -> Result<Movie> {
        let new_movie = NewMovie {
            name,
            genre,
            rate,
            year,
            img_src,
            trailer_id: Some(trailer_id),
            description: Some(description),
            director_id,
        };

        let state = ctx.data::<AppState>()?;
        state
            .movie_repository
            .create(new_movie)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    /// Remove a director and return it. Movies pointing at it are left as they are.
    async fn delete_director(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Director>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        state
            .director_repository
            .delete_by_id(&id)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    async fn delete_movie(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Movie>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        state
            .movie_repository
            .delete_by_id(&id)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    /// Replace name, age and image; every other field is kept
    async fn update_director(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: String,
        age: i32,
        img_src: String,
    ) -> Result<Option<Director>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        state
            .director_repository
            .update_by_id(&id, UpdateDirector { name, age, img_src })
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    /// Replace the core fields; description and trailer are kept. An omitted
    /// director reference is kept, an explicit null clears it
    #[allow(clippy::too_many_arguments)]
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: String,
        genre: String,
        rate: f64,
        year: i32,
        img_src: String,
        director_id: MaybeUndefined<String>,
    ) -> Result<Option<Movie>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let director_id = match director_id {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(director_id) => Some(Some(director_id)),
        };

        let changes = UpdateMovie {
            name,
            genre,
            rate,
            year,
            img_src,
            director_id,
        };

        let state = ctx.data::<AppState>()?;
        state
            .movie_repository
            .update_by_id(&id, changes)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let state = ctx.data::<AppState>()?;
        state
            .auth_service
            .login(&email, &password)
            .await
            .map(AuthPayload::from)
            .map_err(|e| e.extend())
    }

    async fn sign_up(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let state = ctx.data::<AppState>()?;
        state
            .auth_service
            .sign_up(&email, &password)
            .await
            .map(AuthPayload::from)
            .map_err(|e| e.extend())
    }
}
