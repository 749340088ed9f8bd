use crate::modules::content::router::init_content_router;
use crate::modules::home::router::init_home_router;
use crate::middleware::auth::TOKEN_HEADER;
use crate::state::AppState;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{Router, middleware};
use ecole_observability::logging_middleware;
use tower_http::cors::CorsLayer;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_home_router())
        .nest("/api/test", init_content_router(state.clone()))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    HeaderName::from_static(TOKEN_HEADER),
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}
