use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, is_long_enough, verify_password},
        repo::EmailTaken,
        repo_types::NewUser,
        services::{is_valid_email, issue_tokens, normalize_email},
    },
    error::AppError,
    extract::AppJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".into())
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let email = normalize_email(&payload.email);
    let username = payload.username.trim().to_string();

    if username.is_empty() {
        warn!("empty username");
        return Err(AppError::BadRequest("Username is required".into()));
    }

    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::BadRequest("Invalid email".into()));
    }

    if !is_long_enough(&payload.password) {
        warn!("password too short");
        return Err(AppError::BadRequest("Password too short".into()));
    }

    // Ensure email is not taken
    match state.users.find_by_email(&email).await {
        Ok(Some(_)) => {
            warn!(email = %email, "email already registered");
            return Err(AppError::Conflict("Email already registered".into()));
        }
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err(AppError::internal("Server error"));
        }
    }

    let password_hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        AppError::internal("Server error")
    })?;

    let user = state
        .users
        .create(NewUser {
            username,
            email,
            password_hash,
        })
        .await
        .map_err(|e| {
            if e.downcast_ref::<EmailTaken>().is_some() {
                warn!("email registered concurrently");
                return AppError::Conflict("Email already registered".into());
            }
            error!(error = %e, "create user failed");
            AppError::internal_with("Failed to register user", e)
        })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    let keys = JwtKeys::from_ref(&state);
    Ok((StatusCode::CREATED, Json(issue_tokens(&keys, user)?)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = normalize_email(&payload.email);

    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::BadRequest("Invalid email".into()));
    }

    let user = match state.users.find_by_email(&email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %email, "login unknown email");
            return Err(invalid_credentials());
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err(AppError::internal("Server error"));
        }
    };

    let ok = verify_password(&payload.password, user.password_hash.as_deref()).map_err(|e| {
        error!(error = %e, "verify_password failed");
        AppError::internal("Server error")
    })?;

    if !ok {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Err(invalid_credentials());
    }

    if !user.is_active {
        warn!(user_id = %user.id, "login on deactivated account");
        return Err(invalid_credentials());
    }

    info!(user_id = %user.id, email = %user.email, "user logged in");
    let keys = JwtKeys::from_ref(&state);
    Ok(Json(issue_tokens(&keys, user)?))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys.verify_refresh(&payload.refresh_token).map_err(|e| {
        warn!(error = %e, "refresh rejected");
        AppError::Unauthorized("Invalid refresh token".into())
    })?;

    let user = match state.users.find_by_id(claims.sub).await {
        Ok(Some(u)) if u.is_active => u,
        Ok(_) => return Err(AppError::Unauthorized("User not found".into())),
        Err(e) => {
            error!(error = %e, user_id = %claims.sub, "find_by_id failed");
            return Err(AppError::internal("Server error"));
        }
    };

    Ok(Json(issue_tokens(&keys, user)?))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, AppError> {
    match state.users.find_by_id(user_id).await {
        Ok(Some(user)) if user.is_active => Ok(Json(PublicUser::from(user))),
        Ok(_) => {
            warn!(user_id = %user_id, "user not found or inactive");
            Err(AppError::Unauthorized("User not found".into()))
        }
        Err(e) => {
            error!(error = %e, user_id = %user_id, "find_by_id failed");
            Err(AppError::internal("Server error"))
        }
    }
}
