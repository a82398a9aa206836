use axum::{
    extract::{Path, State},
    Json,
};
use comment_shared::{Comment, MessageResponse};
use uuid::Uuid;

use crate::error::AppError;
use crate::routes::AppState;

/// GET /api/comments
pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state.store.list_newest_first().await?;
    Ok(Json(comments))
}

/// DELETE /api/comments/:id
///
/// A path segment that does not parse as a UUID is reported as an
/// internal error, same as any other storage-layer fault.
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|e| anyhow::anyhow!("malformed comment id {id:?}: {e}"))?;

    match state.store.delete_by_id(id).await? {
        Some(_) => Ok(Json(MessageResponse::new("Comment deleted successfully"))),
        None => Err(AppError::NotFound),
    }
}
