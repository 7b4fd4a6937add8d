use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{MethodRouter, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{method_not_allowed, save_data_handler};
use crate::infra::{app_state::AppState, config::CorsConfig};

pub const SAVE_DATA: &str = "/save_data";
pub const SAVE_DATA_ALIAS: &str = "/api/save";

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors);

    Router::new()
        .route(SAVE_DATA, save_route())
        .route(SAVE_DATA_ALIAS, save_route())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn save_route() -> MethodRouter<AppState> {
    post(save_data_handler)
        .options(|| async { StatusCode::NO_CONTENT })
        .fallback(method_not_allowed)
}

pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
