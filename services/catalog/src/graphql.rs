//! GraphQL schema for the catalog
//!
//! One query root, one mutation root, no subscriptions. Resolvers reach the
//! store through the [`AppState`] stored as schema data.

use async_graphql::{EmptySubscription, Schema};

use crate::state::AppState;

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::AuthPayload;

/// Catalog schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the application state
pub fn build_schema(state: AppState) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
