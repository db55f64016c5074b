//! Catalog entities and the payloads used to create and update them

pub mod director;
pub mod movie;
pub mod user;

// Re-export for convenience
pub use director::{Director, NewDirector, UpdateDirector};
pub use movie::{Movie, MovieFilter, NewMovie, UpdateMovie};
pub use user::{NewUser, User};
