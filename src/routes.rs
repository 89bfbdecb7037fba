use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Form, State};
use axum::response::{Html, Redirect};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{NewMovie, Rating};
use crate::templates;

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_all().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn seed(State(state): State<Arc<AppState>>) -> AppResult<Redirect> {
    state.store.seed_if_empty().await?;
    tracing::debug!("seed ensured");
    Ok(Redirect::to("/"))
}

pub async fn update_demo(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let outcome = state.store.update_rating("Inception", Rating::Pg).await?;
    let payload = serde_json::to_string_pretty(&outcome).context("serialize update outcome")?;
    Ok(Html(templates::result_page(
        "Update Demo",
        &payload,
        r#"Tried: update_rating("Inception", "PG")"#,
    )))
}

pub async fn delete_demo(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let outcome = state.store.delete_by_rating(Rating::R).await?;
    let payload = serde_json::to_string_pretty(&outcome).context("serialize delete outcome")?;
    Ok(Html(templates::result_page(
        "Delete Demo",
        &payload,
        r#"Tried: delete_by_rating("R")"#,
    )))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewMovie>,
) -> AppResult<Redirect> {
    let movie = state.store.create(&form.title, form.year, &form.rating).await?;
    tracing::info!(title = %movie.title, year = movie.year, rating = %movie.rating, "movie created");
    Ok(Redirect::to("/"))
}
