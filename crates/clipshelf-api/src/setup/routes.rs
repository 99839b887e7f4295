//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use clipshelf_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/videos", get(handlers::videos_list::list_videos))
        .route("/api/check-name/{name}", get(handlers::check_name::check_name))
        .route("/api/rename/{id}", put(handlers::video_rename::rename_video))
        .route("/api/upload", post(handlers::video_upload::upload_video))
        .route(
            "/api/upload-thumbnail",
            post(handlers::thumbnail_upload::upload_thumbnail),
        )
        .route("/api/video/{id}", delete(handlers::video_delete::delete_video))
        .route("/video/{id}", get(handlers::video_stream::stream_video))
        .route("/thumbnail/{id}", get(handlers::thumbnail_get::get_thumbnail))
        .route("/api/openapi.json", get(openapi_spec))
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(RequestBodyLimitLayer::new(config.max_video_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Setup CORS configuration
///
/// Range-aware clients (browser video elements) must be able to read the
/// range response headers cross-origin, so those are always exposed.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let exposed_headers = [
        header::CONTENT_RANGE,
        header::ACCEPT_RANGES,
        header::CONTENT_LENGTH,
    ];
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if config.cors_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .expose_headers(exposed_headers)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods(methods)
            .allow_headers(Any)
            .expose_headers(exposed_headers)
    };
    Ok(cors)
}
