//! Thin REST backend over tempo-core.
//!
//! Routes, envelopes, and status codes mirror what the browser client
//! expects; all domain logic lives in the core library.

use std::env;
use std::net::SocketAddr;
use std::path::Path;

use axum::routing::{get, post, put};
use axum::Router;
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tempo_core::storage::Store;

mod auth;
mod error;
mod extract;
mod handlers;
mod state;


use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,tempo_server=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = match env::var("TEMPO_DB") {
        Ok(path) => Store::open_at(Path::new(&path))?,
        Err(_) => Store::open()?,
    };
    let secret = env::var("TEMPO_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("TEMPO_JWT_SECRET not set, using a development secret");
        "dev-secret-change-in-production".into()
    });

    let app = create_app(AppState::new(store, secret));

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/me", get(handlers::auth::me))
        .route("/api/user/settings", put(handlers::users::update_settings))
        .route(
            "/api/tasks",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/api/tasks/:id",
            put(handlers::tasks::update).delete(handlers::tasks::remove),
        )
        .route(
            "/api/notes",
            get(handlers::notes::list).post(handlers::notes::create),
        )
        .route(
            "/api/notes/:id",
            put(handlers::notes::update).delete(handlers::notes::remove),
        )
        .route(
            "/api/sessions",
            get(handlers::sessions::list).post(handlers::sessions::create),
        )
        .route("/api/analytics", get(handlers::analytics::report))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
