//! Handlers for user CRUD. No authentication -- users are plain records
//! keyed by email, created on first contact from the client application.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mfapi_core::types::DbId;
use mfapi_db::models::user::{CreateUserRequest, UpdateUserRequest};
use mfapi_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::handlers::validate_payload;
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameter for the lookup-by-email endpoint.
#[derive(Debug, Deserialize)]
pub struct UserByEmailParams {
    pub email: Option<String>,
}

/// POST /api/users
///
/// Create a new user, or return the existing record when the email is
/// already registered (200 instead of 201). A concurrent create losing the
/// race to the email unique constraint resolves to the same
/// "already exists" outcome.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Envelope)> {
    validate_payload(&input)?;

    if let Some(existing) = UserRepo::find_by_email(&state.pool, &input.email).await? {
        tracing::info!(email = %input.email, "User already exists");
        return Ok((
            StatusCode::OK,
            Envelope::success("User already exists").data(serde_json::to_value(existing)?),
        ));
    }

    match UserRepo::create(&state.pool, &input).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "User created");
            Ok((
                StatusCode::CREATED,
                Envelope::success("User created").data(serde_json::to_value(user)?),
            ))
        }
        Err(err) if is_unique_violation(&err, "uq_users_email") => {
            let user = UserRepo::find_by_email(&state.pool, &input.email)
                .await?
                .ok_or(err)?;
            tracing::info!(email = %user.email, "User already exists");
            Ok((
                StatusCode::OK,
                Envelope::success("User already exists").data(serde_json::to_value(user)?),
            ))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /api/users?email=
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(params): Query<UserByEmailParams>,
) -> AppResult<Envelope> {
    let email = params
        .email
        .ok_or_else(|| AppError::BadRequest("email required".into()))?;

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Envelope::success("User fetched").data(serde_json::to_value(user)?))
}

/// GET /api/users/{user_id}
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Envelope> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Envelope::success("User fetched").records(serde_json::to_value(user)?))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Envelope> {
    validate_payload(&input)?;

    let user = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    tracing::info!(user_id, "User updated");
    Ok(Envelope::success("User updated").data(serde_json::to_value(user)?))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Envelope> {
    let deleted = UserRepo::delete(&state.pool, user_id).await?;

    if !deleted {
        return Err(AppError::NotFound("User not found".into()));
    }

    tracing::info!(user_id, "User deleted");
    Ok(Envelope::success("User deleted"))
}

/// GET /api/users/all
pub async fn list_all_users(State(state): State<AppState>) -> AppResult<Envelope> {
    let users = UserRepo::list_all(&state.pool).await?;

    Ok(Envelope::success("Users fetched")
        .count(users.len() as i64)
        .records(serde_json::to_value(users)?))
}
