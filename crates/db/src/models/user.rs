//! User entity model and DTOs.

use mfapi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a user (`POST /api/users`).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 200, message = "Length must be between 1 and 200."))]
    pub name: String,
    #[validate(email(message = "Not a valid email address."))]
    pub email: String,
    #[validate(url(message = "Not a valid URL."))]
    pub picture: Option<String>,
    #[validate(length(max = 20, message = "Longer than maximum length 20."))]
    pub phone_number: Option<String>,
}

/// Request body for updating a user (`PUT /api/users/{id}`). All fields optional.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 200, message = "Length must be between 1 and 200."))]
    pub name: Option<String>,
    #[validate(email(message = "Not a valid email address."))]
    pub email: Option<String>,
    #[validate(url(message = "Not a valid URL."))]
    pub picture: Option<String>,
    #[validate(length(max = 20, message = "Longer than maximum length 20."))]
    pub phone_number: Option<String>,
}
