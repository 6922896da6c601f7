use axum::extract::{Path, State};
use axum::Json;
use entity::director;
use movie_catalog_service::{CrudService, DirectorService};

use crate::error::{ApiError, ApiResult, OrInternal};
use crate::state::AppState;

pub async fn list_directors(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<director::Model>>> {
    let directors = DirectorService::find_all(state.db())
        .await
        .or_internal("Error retrieving directors")?;

    Ok(Json(directors))
}

pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<director::Model>> {
    DirectorService::find_director_by_id(state.db(), id)
        .await
        .or_internal("Error retrieving director")?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Director not found with id: {id}")))
}
