//! HTTP handlers for the song catalog.
//!
//! Handlers are generic over the metadata client so router tests can run
//! against a mock. Input validation that belongs at the boundary lives
//! here: required fields and positive page numbers. Everything past that
//! is the service's business.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::Error;
use crate::metadata::SongInfoApi;
use crate::model::{SongFilter, SongInput, VersePagination};
use crate::service::SongService;

/// Shared handler state: the service behind an `Arc`.
pub type AppState<M> = Arc<SongService<M>>;

/// JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Map the error taxonomy onto status codes: not-found 404, validation
/// 400, everything else 500. Context wrappers are unwrapped first.
fn status_for(err: &Error) -> StatusCode {
    if err.is_not_found() {
        return StatusCode::NOT_FOUND;
    }
    let mut root = err;
    while let Error::WithContext { source, .. } = root {
        root = source;
    }
    match root {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn validate_input(input: &SongInput) -> Result<(), Error> {
    if input.group_name.trim().is_empty() {
        return Err(Error::validation("group must not be empty"));
    }
    if input.song_name.trim().is_empty() {
        return Err(Error::validation("song must not be empty"));
    }
    Ok(())
}

fn validate_page(page: u32, page_size: u32) -> Result<(), Error> {
    if page < 1 {
        return Err(Error::validation("page must be at least 1"));
    }
    if page_size < 1 {
        return Err(Error::validation("page_size must be at least 1"));
    }
    Ok(())
}

/// `POST /api/v1/songs`
pub async fn create_song<M: SongInfoApi>(
    State(service): State<AppState<M>>,
    Json(input): Json<SongInput>,
) -> Result<Response, Error> {
    validate_input(&input)?;
    let song = service.create_song(input).await?;
    Ok((StatusCode::CREATED, Json(song)).into_response())
}

/// `GET /api/v1/songs`
pub async fn list_songs<M: SongInfoApi>(
    State(service): State<AppState<M>>,
    Query(filter): Query<SongFilter>,
) -> Result<Response, Error> {
    validate_page(filter.page, filter.page_size)?;
    let songs = service.list_songs(&filter).await?;
    Ok(Json(songs).into_response())
}

/// `GET /api/v1/songs/{id}`
pub async fn get_song<M: SongInfoApi>(
    State(service): State<AppState<M>>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let song = service.get_song(id).await?;
    Ok(Json(song).into_response())
}

/// `GET /api/v1/songs/{id}/verses`
pub async fn song_verses<M: SongInfoApi>(
    State(service): State<AppState<M>>,
    Path(id): Path<i64>,
    Query(pagination): Query<VersePagination>,
) -> Result<Response, Error> {
    validate_page(pagination.page, pagination.page_size)?;
    let result = service.song_with_verses(id, pagination).await?;
    Ok(Json(result).into_response())
}

/// `PUT /api/v1/songs/{id}`
pub async fn update_song<M: SongInfoApi>(
    State(service): State<AppState<M>>,
    Path(id): Path<i64>,
    Json(input): Json<SongInput>,
) -> Result<Response, Error> {
    validate_input(&input)?;
    let song = service.update_song(id, input).await?;
    Ok(Json(song).into_response())
}

/// `DELETE /api/v1/songs/{id}`
pub async fn delete_song<M: SongInfoApi>(
    State(service): State<AppState<M>>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    service.delete_song(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
