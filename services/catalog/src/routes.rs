//! Catalog service routes

use async_graphql::http::GraphiQLSource;
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::graphql::CatalogSchema;

/// Path of the GraphQL endpoint
pub const GRAPHQL_PATH: &str = "/graphql";

/// Create the router for the catalog service
pub fn create_router(schema: CatalogSchema) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "catalog-service"
    }))
}

/// Execute a GraphQL request
pub async fn graphql_handler(
    State(schema): State<CatalogSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

/// GraphiQL IDE
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
