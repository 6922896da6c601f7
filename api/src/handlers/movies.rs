use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use entity::movie;
use movie_catalog_service::sea_orm::{ActiveValue::Set, DbErr, TransactionTrait};
use movie_catalog_service::{DirectorService, MovieDetails, MovieService};
use serde::Deserialize;

use super::non_blank;
use crate::error::{ApiError, ApiResult, OrInternal};
use crate::state::AppState;

/// Body of `POST /movies`. Related entities are referenced by id; anything
/// else they carry is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub runtime_min: Option<i32>,
    pub plot_one_line: Option<String>,
    pub poster_url: Option<String>,
    pub imdb_id: Option<String>,
    pub director: Option<EntityRef>,
    /// Missing and `null` both mean no cast.
    #[serde(default)]
    pub actors: Option<Vec<EntityRef>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntityRef {
    pub id: Option<i32>,
}

pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieDetails>>> {
    let movies = MovieService::list_all(state.db())
        .await
        .or_internal("Error retrieving movies")?;

    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MovieDetails>> {
    MovieService::find_with_details(state.db(), id)
        .await
        .or_internal("Error retrieving movie")?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Movie not found with id: {id}")))
}

pub async fn movies_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<MovieDetails>>> {
    let movies = MovieService::find_by_year(state.db(), year)
        .await
        .or_internal("Error retrieving movies by year")?;

    Ok(Json(movies))
}

/// Inserts the movie and its cast in one transaction and answers with the
/// stored details.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<CreateMovie>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MovieDetails>)> {
    const CONTEXT: &str = "Error creating movie";

    let Json(payload) = payload.map_err(|rejection| {
        ApiError::bad_request(format!("Invalid movie payload: {}", rejection.body_text()))
    })?;

    let title = non_blank(payload.title)
        .ok_or_else(|| ApiError::bad_request("Movie title is required"))?;
    let year = payload
        .year
        .ok_or_else(|| ApiError::bad_request("Movie year is required"))?;
    let director_id = payload
        .director
        .and_then(|director| director.id)
        .ok_or_else(|| ApiError::bad_request("Movie director is required"))?;

    let txn = state.db().begin().await.or_internal(CONTEXT)?;

    let director = DirectorService::find_director_by_id(&txn, director_id)
        .await
        .or_internal(CONTEXT)?
        .ok_or_else(|| ApiError::bad_request("Movie director is required"))?;

    let actor_ids: Vec<i32> = payload
        .actors
        .iter()
        .flatten()
        .filter_map(|actor| actor.id)
        .collect();

    let draft = movie::ActiveModel {
        title: Set(title),
        year: Set(year),
        genre: Set(non_blank(payload.genre)),
        runtime_min: Set(payload.runtime_min),
        plot_one_line: Set(non_blank(payload.plot_one_line)),
        poster_url: Set(non_blank(payload.poster_url)),
        imdb_id: Set(non_blank(payload.imdb_id)),
        director_id: Set(director.id),
        ..Default::default()
    };

    let movie = MovieService::create_with_actors(&txn, draft, &actor_ids)
        .await
        .map_err(|err| match err {
            DbErr::Custom(message) => ApiError::bad_request(message),
            err => ApiError::internal(CONTEXT, err),
        })?;

    let details = MovieService::find_with_details(&txn, movie.id)
        .await
        .or_internal(CONTEXT)?
        .ok_or_else(|| ApiError::internal(CONTEXT, format!("movie {} vanished", movie.id)))?;

    txn.commit().await.or_internal(CONTEXT)?;

    Ok((StatusCode::CREATED, Json(details)))
}
