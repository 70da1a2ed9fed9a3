// routes.rs
use axum::routing::get;
use axum::Router;
use http::{header, HeaderValue, Method};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, choices, polls, questions};

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the full route table. Unknown paths and unsupported methods on
/// known paths both answer 404.
pub fn create_routes(pool: PgPool, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/api/hello", get(handlers::hello))
        .merge(polls::router())
        .merge(questions::router())
        .merge(choices::router())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pool })
}
