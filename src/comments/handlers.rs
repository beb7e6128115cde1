use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::{
    dto::{CreateCommentRequest, UpdateCommentRequest},
    repo_types::{Comment, NewComment},
};
use crate::{
    auth::AuthUser,
    dto::MessageResponse,
    error::AppError,
    extract::{AppJson, AppPath},
    ownership::owned_by,
    state::AppState,
    validation::{check_text, require_text},
};

pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/skills/:id/comments",
            get(list_comments).post(create_comment),
        )
        .route("/comments/:id", patch(update_comment).delete(delete_comment))
}

fn not_authorized() -> AppError {
    AppError::Forbidden("Not authorized".into())
}

/// 404 unless the parent skill exists.
async fn ensure_skill(state: &AppState, skill_id: i64, failure: &str) -> Result<(), AppError> {
    match state.skills.find(skill_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(AppError::NotFound("Skill not found".into())),
        Err(e) => {
            error!(error = %e, %skill_id, "skill lookup failed");
            Err(AppError::internal(failure))
        }
    }
}

#[instrument(skip(state))]
pub async fn list_comments(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<i64>,
) -> Result<Json<Vec<Comment>>, AppError> {
    const FAILURE: &str = "Failed to fetch comments";
    ensure_skill(&state, skill_id, FAILURE).await?;

    let comments = state.comments.list_by_skill(skill_id).await.map_err(|e| {
        error!(error = %e, %skill_id, "list comments failed");
        AppError::internal(FAILURE)
    })?;
    Ok(Json(comments))
}

#[instrument(skip(state, payload))]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(skill_id): AppPath<i64>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    const FAILURE: &str = "Failed to create comment";
    ensure_skill(&state, skill_id, FAILURE).await?;
    if state.config.strict_validation {
        require_text("body", Some(payload.body.as_str()))?;
    }

    let comment = state
        .comments
        .create(NewComment {
            body: payload.body,
            user_id,
            skill_id,
        })
        .await
        .map_err(|e| {
            error!(error = %e, %skill_id, %user_id, "create comment failed");
            AppError::internal_with(FAILURE, format!("{e:#}"))
        })?;

    info!(comment_id = %comment.id, %skill_id, %user_id, "comment created");
    Ok((StatusCode::CREATED, Json(comment)))
}

#[instrument(skip(state, payload))]
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let failed = |e: anyhow::Error| {
        error!(error = %e, %id, %user_id, "update comment failed");
        AppError::internal("Failed to update comment")
    };

    let found = state.comments.find(id).await.map_err(failed)?;
    if owned_by(found, user_id).is_none() {
        warn!(%id, %user_id, "update rejected: missing or not owner");
        return Err(not_authorized());
    }

    if state.config.strict_validation {
        check_text("body", payload.body.as_deref())?;
    }

    let comment = state
        .comments
        .update(id, payload.body)
        .await
        .map_err(failed)?
        .ok_or_else(not_authorized)?;

    info!(comment_id = %id, %user_id, "comment updated");
    Ok(Json(comment))
}

#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let failed = |e: anyhow::Error| {
        error!(error = %e, %id, %user_id, "delete comment failed");
        AppError::internal("Failed to delete comment")
    };

    let found = state.comments.find(id).await.map_err(failed)?;
    if owned_by(found, user_id).is_none() {
        warn!(%id, %user_id, "delete rejected: missing or not owner");
        return Err(not_authorized());
    }

    if !state.comments.delete(id).await.map_err(failed)? {
        return Err(not_authorized());
    }

    info!(comment_id = %id, %user_id, "comment deleted");
    Ok(Json(MessageResponse::new("Comment deleted")))
}
