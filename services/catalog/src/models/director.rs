//! Director model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Director entity
///
/// `movies_count` and `movies_years` are free-form caller data and are not
/// kept in sync with the movies that reference the director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Director {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub img_src: String,
    pub born: Option<String>,
    pub born_place: Option<String>,
    pub career: Option<String>,
    pub genres: Option<String>,
    pub height: Option<f64>,
    pub imdb_src: Option<String>,
    pub movies_count: Option<i32>,
    pub movies_years: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New director creation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDirector {
    pub name: String,
    pub age: i32,
    pub img_src: String,
    pub born: Option<String>,
    pub born_place: Option<String>,
    pub career: Option<String>,
    pub genres: Option<String>,
    pub height: Option<f64>,
    pub imdb_src: Option<String>,
    pub movies_count: Option<i32>,
    pub movies_years: Option<String>,
}

/// Director update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDirector {
    pub name: String,
    pub age: i32,
    pub img_src: String,
}

impl NewDirector {
    /// Materialize the payload as a stored director
    pub fn into_director(self, id: Uuid, created_at: DateTime<Utc>) -> Director {
        Director {
            id,
            name: self.name,
            age: self.age,
            img_src: self.img_src,
            born: self.born,
            born_place: self.born_place,
            career: self.career,
            genres: self.genres,
            height: self.height,
            imdb_src: self.imdb_src,
            movies_count: self.movies_count,
            movies_years: self.movies_years,
            created_at,
        }
    }
}

impl Director {
    /// Apply an update payload in place
    pub fn apply(&mut self, changes: UpdateDirector) {
        self.name = changes.name;
        self.age = changes.age;
        self.img_src = changes.img_src;
    }
}
