//! GraphQL object types and relation resolvers

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::{
    auth::LoginSession,
    error::ApiError,
    models::{Director, Movie, User},
    state::AppState,
};

/// Value returned for the password field instead of the stored hash
pub const REDACTED_PASSWORD: &str = "******";

#[Object]
impl Movie {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn genre(&self) -> &str {
        &self.genre
    }

    async fn rate(&self) -> f64 {
        self.rate
    }

    async fn year(&self) -> i32 {
        self.year
    }

    async fn img_src(&self) -> &str {
        &self.img_src
    }

    async fn trailer_id(&self) -> Option<&str> {
        self.trailer_id.as_deref()
    }

    async fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Raw director reference, not checked against existing directors
    async fn director_id(&self) -> Option<&str> {
        self.director_id.as_deref()
    }

    /// Director referenced by this movie; null when the reference is unset or dangling
    async fn director(&self, ctx: &Context<'_>) -> Result<Option<Director>> {
        let Some(director_id) = self.director_id.as_deref() else {
            return Ok(None);
        };

        let state = ctx.data::<AppState>()?;
        state
            .director_repository
            .get(director_id)
            .await
            .map_err(|e| ApiError::from(e).extend())
    }
}

#[Object]
impl Director {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn age(&self) -> i32 {
        self.age
    }

    async fn img_src(&self) -> &str {
        &self.img_src
    }

    async fn born(&self) -> Option<&str> {
        self.born.as_deref()
    }

    async fn born_place(&self) -> Option<&str> {
        self.born_place.as_deref()
    }

    async fn career(&self) -> Option<&str> {
        self.career.as_deref()
    }

    async fn genres(&self) -> Option<&str> {
        self.genres.as_deref()
    }

    async fn height(&self) -> Option<f64> {
        self.height
    }

    async fn imdb_src(&self) -> Option<&str> {
        self.imdb_src.as_deref()
    }

    async fn movies_count(&self) -> Option<i32> {
        self.movies_count
    }

    async fn movies_years(&self) -> Option<&str> {
        self.movies_years.as_deref()
    }

    /// Movies whose director reference points at this director
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let state = ctx.data::<AppState>()?;
        state
            .movie_repository
            .list_by_director_id(&self.id.to_string())
            .await
            .map_err(|e| ApiError::from(e).extend())
    }
}

/// Account returned by `signUp` and `login`
///
/// The password hash never leaves the service: the field exists for schema
/// compatibility and is always redacted.
pub struct AuthPayload {
    user: User,
    token: Option<String>,
}

impl From<User> for AuthPayload {
    fn from(user: User) -> Self {
        Self { user, token: None }
    }
}

impl From<LoginSession> for AuthPayload {
    fn from(session: LoginSession) -> Self {
        Self {
            user: session.user,
            token: Some(session.token),
        }
    }
}

#[Object(name = "User")]
impl AuthPayload {
    async fn id(&self) -> ID {
        ID(self.user.id.to_string())
    }

    async fn email(&self) -> &str {
        &self.user.email
    }

    async fn password(&self) -> &str {
        REDACTED_PASSWORD
    }

    async fn is_admin(&self) -> bool {
        self.user.is_admin
    }

    /// `Bearer <credential>`, only present on login
    async fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
