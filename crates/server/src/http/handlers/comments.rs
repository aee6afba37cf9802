use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use domain::{page_offset, Comment, UserId};
use serde::{Deserialize, Serialize};

use super::{authenticate, internal, ApiError};
use crate::state::AppState;

const PAGE_SIZE: i64 = 50;

#[derive(Deserialize)]
pub struct CommentsQuery {
    pub user_id: i64,
    pub paged: Option<i64>,
}

#[derive(Serialize)]
pub struct CommentsPage {
    pub comments: Vec<Comment>,
    pub total: i64,
}

/// Comment management screen, filtered to one author. Target of the column's links.
pub async fn list_user_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CommentsQuery>,
) -> Result<Json<CommentsPage>, ApiError> {
    authenticate(&state, &headers)?;

    let user_id =
        UserId::new(params.user_id).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let (comments, total) = state
        .db
        .list_comments_by_user(user_id, PAGE_SIZE, page_offset(params.paged, PAGE_SIZE))
        .await
        .map_err(internal)?;

    Ok(Json(CommentsPage { comments, total }))
}
