use super::handlers::{comments, counts, users};
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);
    if allowed_origins == "*" {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<HeaderValue>().ok())
        .collect();
    if origins.is_empty() {
        tracing::warn!("CORS origins {:?} are invalid or empty, allowing any", allowed_origins);
        return base.allow_origin(Any);
    }
    tracing::info!("CORS enabled for origins: {:?}", origins);
    base.allow_origin(origins)
}

pub fn build_router(state: AppState, allowed_origins: &str) -> Router {
    Router::new()
        .route("/admin/users", get(users::list_users))
        .route("/admin/comments", get(comments::list_user_comments))
        .route("/admin/comment-counts/:id_or_email", get(counts::comment_counts))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}
