//! Repository for the `favorites` table.
//!
//! The triple (user_id, item_id, item_type) is unique, enforced by the
//! `uq_favorites_user_item` constraint. Writes go through `ON CONFLICT` so a
//! lost race surfaces as [`AddOutcome::AlreadyExists`] rather than an error.

use sqlx::PgPool;

use crate::models::favorite::Favorite;

/// Column list for `favorites` queries.
const COLUMNS: &str = "id, user_id, item_id, item_type, item_name, created_at";

/// Outcome of an add: either a newly stored row or a no-op because the
/// user already favorited the item. Both are success to the caller.
#[derive(Debug)]
pub enum AddOutcome {
    Created(Favorite),
    AlreadyExists,
}

/// Provides CRUD operations for user favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Look up a favorite by its exact (user, item, type) triple.
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        item_id: &str,
        item_type: &str,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites \
             WHERE user_id = $1 AND item_id = $2 AND item_type = $3"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(item_id)
            .bind(item_type)
            .fetch_optional(pool)
            .await
    }

    /// Add a favorite for a user.
    ///
    /// Checks for an existing row first so callers can report "already in
    /// favorites" without writing. The insert itself still runs with
    /// `ON CONFLICT ... DO NOTHING`: if a concurrent add wins the race between
    /// check and insert, the unique constraint absorbs the duplicate and the
    /// outcome is `AlreadyExists`, never a constraint-violation error.
    pub async fn add(
        pool: &PgPool,
        user_id: &str,
        item_id: &str,
        item_type: &str,
        item_name: &str,
    ) -> Result<AddOutcome, sqlx::Error> {
        if Self::find(pool, user_id, item_id, item_type).await?.is_some() {
            return Ok(AddOutcome::AlreadyExists);
        }

        let query = format!(
            "INSERT INTO favorites (user_id, item_id, item_type, item_name) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_favorites_user_item DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(item_id)
            .bind(item_type)
            .bind(item_name)
            .fetch_optional(pool)
            .await?;

        Ok(match inserted {
            Some(favorite) => AddOutcome::Created(favorite),
            None => AddOutcome::AlreadyExists,
        })
    }

    /// Delete the favorite matching the exact triple.
    ///
    /// Returns `false` when no row matched.
    pub async fn remove(
        pool: &PgPool,
        user_id: &str,
        item_id: &str,
        item_type: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorites \
             WHERE user_id = $1 AND item_id = $2 AND item_type = $3",
        )
        .bind(user_id)
        .bind(item_id)
        .bind(item_type)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a user's favorites, optionally filtered by item type.
    ///
    /// Served by the (user_id, item_type) index; insertion order via id.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        item_type: Option<&str>,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        match item_type {
            Some(item_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM favorites \
                     WHERE user_id = $1 AND item_type = $2 \
                     ORDER BY id"
                );
                sqlx::query_as::<_, Favorite>(&query)
                    .bind(user_id)
                    .bind(item_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, Favorite>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Item ids of a user's favorites of one type, for cross-table resolution.
    pub async fn list_item_ids(
        pool: &PgPool,
        user_id: &str,
        item_type: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT item_id FROM favorites \
             WHERE user_id = $1 AND item_type = $2 \
             ORDER BY id",
        )
        .bind(user_id)
        .bind(item_type)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
