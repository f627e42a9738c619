//! Repository for the `users` table.

use mfapi_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUserRequest, UpdateUserRequest, User};

/// Column list for `users` queries.
const COLUMNS: &str = "id, name, email, picture, phone_number, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user.
    pub async fn create(pool: &PgPool, input: &CreateUserRequest) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, picture, phone_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.picture)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Look up a user by email address.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Look up a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply the provided fields to an existing user and bump `updated_at`.
    ///
    /// Returns the updated row, or `None` when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserRequest,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 picture = COALESCE($4, picture), \
                 phone_number = COALESCE($5, phone_number), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.picture)
            .bind(&input.phone_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All users, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
