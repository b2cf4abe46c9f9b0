//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router,
    http::{Method, header},
};
use catalog::{CatalogConfig, MongoCourseRepository, catalog_router};
use mongodb::Client;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 5004;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Course store connection
    let mongo_uri = env::var("MONGO_URI").expect("MONGO_URI must be set in environment");

    let client = Client::with_uri_str(&mongo_uri).await?;
    let config = CatalogConfig::from_env();

    // The client connects lazily; a cheap ping here surfaces a bad URI at
    // startup instead of on the first request
    client
        .database(&config.database)
        .run_command(mongodb::bson::doc! { "ping": 1 })
        .await?;

    tracing::info!(
        database = %config.database,
        collection = %config.collection,
        "Connected to course store"
    );

    let repo = MongoCourseRepository::from_client(&client, &config);

    // CORS configuration: browsers may call from any origin, so no
    // allow-list is read from the environment
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .merge(catalog_router(repo))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
