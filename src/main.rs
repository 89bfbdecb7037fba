mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod store;
mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore};

pub struct AppState {
    pub store: MovieStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,matinee=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    tracing::info!(url = %config.database_url, "connected to database");

    let store = MovieStore::new(db);
    store.seed_if_empty().await?;

    let state = Arc::new(AppState { store });

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/seed", get(routes::seed))
        .route("/update-demo", get(routes::update_demo))
        .route("/delete-demo", get(routes::delete_demo))
        .route("/movies", post(routes::create_movie))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
