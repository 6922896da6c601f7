use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{actors, directors, metadata, movies};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/actors", get(actors::list_actors))
        .route("/actors/{ids}", get(actors::actors_by_ids))
        .route("/directors", get(directors::list_directors))
        .route("/directors/{id}", get(directors::get_director))
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route("/movies/{id}", get(movies::get_movie))
        .route("/movies/year/{year}", get(movies::movies_by_year))
        .route("/omdb", get(metadata::fetch_draft));

    Router::new()
        .nest("/api", api)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
