use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use shelf_types::endpoints;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::{self, AppState};

/// Build the axum router with all book endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(handler::root_handler))
        .route(
            endpoints::BOOKS,
            get(handler::list_books).post(handler::create_book),
        )
        .route(endpoints::BOOK, put(handler::update_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the configured browser origins.
///
/// DELETE is advertised for client compatibility even though no route
/// serves it.
pub fn cors_layer(config: &ServerConfig) -> ServerResult<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| ServerError::Config(format!("invalid origin {origin:?}: {e}")))
        })
        .collect::<ServerResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(config.cors_max_age_secs))
        .allow_credentials(true))
}

/// Router with the CORS policy applied.
pub fn build_app(state: AppState, config: &ServerConfig) -> ServerResult<Router> {
    Ok(build_router(state).layer(cors_layer(config)?))
}
