use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use super::{
    dto::{CreateSkillRequest, UpdateSkillRequest},
    repo_types::{NewSkill, Skill},
    services::{validate_create, validate_update},
};
use crate::{
    auth::AuthUser,
    dto::MessageResponse,
    error::AppError,
    extract::{AppJson, AppPath},
    ownership::owned_by,
    state::AppState,
};

pub fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(list_skills).post(create_skill))
        .route(
            "/skills/:id",
            get(get_skill).patch(update_skill).delete(delete_skill),
        )
}

fn not_authorized() -> AppError {
    AppError::Forbidden("Not authorized".into())
}

#[instrument(skip(state))]
pub async fn list_skills(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = state.skills.list().await.map_err(|e| {
        error!(error = %e, "list skills failed");
        AppError::internal("Failed to fetch skills")
    })?;
    Ok(Json(skills))
}

#[instrument(skip(state))]
pub async fn get_skill(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Skill>, AppError> {
    match state.skills.find(id).await {
        Ok(Some(skill)) => Ok(Json(skill)),
        Ok(None) => Err(AppError::NotFound("Skill not found".into())),
        Err(e) => {
            error!(error = %e, %id, "get skill failed");
            Err(AppError::internal("Server error"))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<CreateSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    if state.config.strict_validation {
        validate_create(&payload)?;
    }

    let skill = state
        .skills
        .create(NewSkill {
            title: payload.title,
            description: payload.description,
            price_per_hour: payload.price_per_hour,
            location: payload.location,
            user_id,
        })
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "create skill failed");
            AppError::internal_with("Failed to create skill", format!("{e:#}"))
        })?;

    info!(skill_id = %skill.id, %user_id, "skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

#[instrument(skip(state, payload))]
pub async fn update_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateSkillRequest>,
) -> Result<Json<Skill>, AppError> {
    let failed = |e: anyhow::Error| {
        error!(error = %e, %id, %user_id, "update skill failed");
        AppError::internal("Failed to update skill")
    };

    let found = state.skills.find(id).await.map_err(failed)?;
    if owned_by(found, user_id).is_none() {
        warn!(%id, %user_id, "update rejected: missing or not owner");
        return Err(not_authorized());
    }

    if state.config.strict_validation {
        validate_update(&payload)?;
    }

    // The row can vanish between the lookup and the write; treat it like a missing one.
    let skill = state
        .skills
        .update(id, payload.into())
        .await
        .map_err(failed)?
        .ok_or_else(not_authorized)?;

    info!(skill_id = %skill.id, %user_id, "skill updated");
    Ok(Json(skill))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let failed = |e: anyhow::Error| {
        error!(error = %e, %id, %user_id, "delete skill failed");
        AppError::internal("Failed to delete skill")
    };

    let found = state.skills.find(id).await.map_err(failed)?;
    if owned_by(found, user_id).is_none() {
        warn!(%id, %user_id, "delete rejected: missing or not owner");
        return Err(not_authorized());
    }

    if !state.skills.delete(id).await.map_err(failed)? {
        return Err(not_authorized());
    }

    info!(skill_id = %id, %user_id, "skill deleted");
    Ok(Json(MessageResponse::new("Skill deleted")))
}
