use crate::catalog::model::{Movie, MovieDraft, generate_id};
use crate::catalog::patch::MoviePatch;
use crate::error::ApiError;
use crate::server::router::AppState;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movie/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}

/// Return all movies in insertion order.
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.catalog.list().await?))
}

/// Return a movie by id, or 404 when no record matches.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(state.catalog.get(id).await?))
}

/// Validate the submitted draft, assign a fresh id, and append the record.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MovieDraft>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Json(draft) = payload?;
    let movie = draft.into_movie(generate_id())?;
    Ok(Json(state.catalog.append(movie).await?))
}

/// Apply a sparse patch to an existing movie and return the updated record.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoviePatch>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let Json(patch) = payload?;
    Ok(Json(state.catalog.update(id, patch).await?))
}

/// Remove a movie by id; empty 204 on success.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
