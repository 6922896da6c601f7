use axum::extract::{Query, State};
use axum::Json;
use omdb::MovieDraft;
use serde::Deserialize;

use super::non_blank;
use crate::error::{ApiError, ApiResult, OrInternal};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmdbQuery {
    pub title: Option<String>,
    pub api_key: Option<String>,
}

/// Looks a title up on OMDb and answers with a movie draft to prefill a
/// form. Without an `apiKey` parameter the configured key is used.
pub async fn fetch_draft(
    State(state): State<AppState>,
    Query(query): Query<OmdbQuery>,
) -> ApiResult<Json<MovieDraft>> {
    let title = non_blank(query.title);
    let api_key = non_blank(query.api_key).or_else(|| state.config.omdb_api_key.clone());

    let (Some(title), Some(api_key)) = (title, api_key) else {
        return Err(ApiError::bad_request(
            "Please provide both title and API key",
        ));
    };

    let movie = state
        .omdb
        .fetch_movie(title.trim(), api_key.trim())
        .await
        .or_internal("Error fetching movie from OMDb")?;

    let draft = MovieDraft::try_from(movie).map_err(|err| {
        tracing::debug!(%err, title = title.trim(), "OMDb lookup came back empty");
        ApiError::not_found("Movie not found or API error")
    })?;

    Ok(Json(draft))
}
