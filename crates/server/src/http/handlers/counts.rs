use adapter::UserCommentColumn;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use domain::{CommentCountSummary, IdOrEmail};
use std::sync::Arc;

use super::{authenticate, ApiError};
use crate::bootstrap::LIST_USERS;
use crate::state::AppState;

/// Per-status comment totals for a user id or email, as the column computes them.
pub async fn comment_counts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id_or_email): Path<String>,
) -> Result<Json<CommentCountSummary>, ApiError> {
    let viewer = authenticate(&state, &headers)?;
    if !viewer.can(LIST_USERS) {
        return Err((StatusCode::FORBIDDEN, format!("Missing capability: {}", LIST_USERS)));
    }

    let column = UserCommentColumn::new(Arc::new(state.db.clone()), state.site.clone());
    let summary = column
        .get_comment_count_summary(IdOrEmail::Text(&id_or_email))
        .await;

    Ok(Json(summary))
}
