use axum::extract::{Path, State};
use axum::Json;
use entity::actor;
use movie_catalog_service::{ActorService, CrudService};

use crate::error::{ApiError, ApiResult, OrInternal};
use crate::state::AppState;

pub async fn list_actors(State(state): State<AppState>) -> ApiResult<Json<Vec<actor::Model>>> {
    let actors = ActorService::find_all(state.db())
        .await
        .or_internal("Error retrieving actors")?;

    Ok(Json(actors))
}

/// `GET /actors/1,2,3`. Ids without a matching actor are left out.
pub async fn actors_by_ids(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> ApiResult<Json<Vec<actor::Model>>> {
    let ids = parse_ids(&ids)?;

    let actors = ActorService::find_by_ids(state.db(), &ids)
        .await
        .or_internal("Error retrieving actors")?;

    Ok(Json(actors))
}

fn parse_ids(raw: &str) -> ApiResult<Vec<i32>> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            ApiError::bad_request("Invalid actor ID format. Use comma-separated numbers.")
        })?;

    if ids.is_empty() {
        return Err(ApiError::bad_request(
            "At least one actor ID must be provided",
        ));
    }

    Ok(ids)
}
