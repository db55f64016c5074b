//! Movie model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Movie entity
///
/// `director_id` is a soft reference: it is stored as given and may name a
/// director that never existed or has since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub genre: String,
    pub rate: f64,
    pub year: i32,
    pub img_src: String,
    pub trailer_id: Option<String>,
    pub description: Option<String>,
    pub director_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New movie creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub genre: String,
    pub rate: f64,
    pub year: i32,
    pub img_src: String,
    pub trailer_id: Option<String>,
    pub description: Option<String>,
    pub director_id: Option<String>,
}

/// Movie update payload
///
/// Description and trailer are not part of the updatable set. For
/// `director_id`, `None` leaves the stored reference untouched and
/// `Some(None)` clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMovie {
    pub name: String,
    pub genre: String,
    pub rate: f64,
    pub year: i32,
    pub img_src: String,
    pub director_id: Option<Option<String>>,
}

/// Filter for movie listings; the default matches every movie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<String>,
}

impl MovieFilter {
    /// Filter matching the movies that reference the given director
    pub fn by_director(director_id: impl Into<String>) -> Self {
        Self {
            director_id: Some(director_id.into()),
        }
    }

    /// Check whether a movie passes the filter
    pub fn matches(&self, movie: &Movie) -> bool {
        match &self.director_id {
            Some(director_id) => movie.director_id.as_deref() == Some(director_id.as_str()),
            None => true,
        }
    }
}

impl NewMovie {
    /// Materialize the payload as a stored movie
    pub fn into_movie(self, id: Uuid, created_at: DateTime<Utc>) -> Movie {
        Movie {
            id,
            name: self.name,
            genre: self.genre,
            rate: self.rate,
            year: self.year,
            img_src: self.img_src,
            trailer_id: self.trailer_id,
            description: self.description,
            director_id: self.director_id,
            created_at,
        }
    }
}

impl Movie {
    /// Apply an update payload in place
    pub fn apply(&mut self, changes: UpdateMovie) {
        self.name = changes.name;
        self.genre = changes.genre;
        self.rate = changes.rate;
        self.year = changes.year;
        self.img_src = changes.img_src;
        if let Some(director_id) = changes.director_id {
            self.director_id = director_id;
        }
    }
}
