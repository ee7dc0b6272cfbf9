pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::{health, post};
use crate::states::AppState;

/// Build the application router with all routes and middleware attached.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/posts", get(post::list_posts).post(post::create_post))
        .route(
            "/posts/{id}",
            get(post::get_post)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
