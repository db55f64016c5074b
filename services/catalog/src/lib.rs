//! Movie and director catalog served over GraphQL
//!
//! The crate exposes the pieces the `catalog` binary wires together so the
//! test suites can build the same schema over the in-process store.

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod graphql;
pub mod jwt;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
