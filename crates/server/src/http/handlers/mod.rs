use axum::http::{HeaderMap, StatusCode};

use crate::bootstrap::Viewer;
use crate::state::AppState;

pub mod comments;
pub mod counts;
pub mod users;

pub type ApiError = (StatusCode, String);

/// Bearer-token check for every admin screen.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Viewer, ApiError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or((
            StatusCode::UNAUTHORIZED,
            "Missing Authorization header".into(),
        ))?;
    let expected_token = format!("Bearer {}", state.admin_token);
    if auth_header != expected_token {
        return Err((StatusCode::FORBIDDEN, "Invalid Admin Token".into()));
    }
    Ok(Viewer::admin(state.admin_capabilities.iter().cloned()))
}

pub fn internal(e: anyhow::Error) -> ApiError {
    tracing::error!("Admin request failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
