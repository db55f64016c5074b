use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use catalog::{
    config::{Settings, StoreBackend},
    database,
    graphql::build_schema,
    jwt::JwtService,
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting catalog service");

    let settings = Settings::load()?;
    let jwt_service = JwtService::new(settings.jwt_config())?;

    let app_state = match settings.store {
        StoreBackend::Postgres => {
            let pool = database::connect(&settings.database_config()).await?;
            AppState::postgres(pool, jwt_service)
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store, data is lost on shutdown");
            AppState::in_memory(jwt_service)
        }
    };

    info!("Catalog service initialized successfully");

    // Start the web server
    let app = routes::create_router(build_schema(app_state));

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Catalog service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalog service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
