//! Repository for the `stocks` table.

use mfapi_core::types::DbId;
use sqlx::PgPool;

use crate::models::stock::Stock;

/// Column list for `stocks` queries.
const COLUMNS: &str = "id, name, symbol, sector, created_at";

/// Columns a stock listing may be sorted by.
const SORTABLE: &[&str] = &["name", "symbol", "created_at"];

/// Provides lookup and listing operations for stocks.
pub struct StockRepo;

impl StockRepo {
    /// Insert a stock record.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        symbol: &str,
        sector: Option<&str>,
    ) -> Result<Stock, sqlx::Error> {
        let query = format!(
            "INSERT INTO stocks (name, symbol, sector) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stock>(&query)
            .bind(name)
            .bind(symbol)
            .bind(sector)
            .fetch_one(pool)
            .await
    }

    /// Get a stock by its database id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Stock>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stocks WHERE id = $1");
        sqlx::query_as::<_, Stock>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List stocks with optional case-insensitive name search, whitelisted
    /// sorting, and pagination.
    pub async fn list(
        pool: &PgPool,
        search: &str,
        sort_by: &str,
        order: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Stock>, sqlx::Error> {
        let col = if SORTABLE.contains(&sort_by) { sort_by } else { "name" };
        let dir = if order == "desc" { "DESC" } else { "ASC" };
        let query = format!(
            "SELECT {COLUMNS} FROM stocks \
             WHERE ($1 = '' OR name ILIKE '%' || $1 || '%') \
             ORDER BY {col} {dir} \
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Stock>(&query)
            .bind(search)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total stocks matching the search filter.
    pub async fn count(pool: &PgPool, search: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM stocks \
             WHERE ($1 = '' OR name ILIKE '%' || $1 || '%')",
        )
        .bind(search)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Resolve favorite item ids to stock rows.
    ///
    /// Item ids normally hold the decimal form of a stock's database id, so
    /// the whole set is parsed first and queried by native id. If even one id
    /// fails to parse, the entire set falls back to a textual comparison --
    /// all-or-nothing, never per id. Ids with no matching row are silently
    /// dropped from the result.
    pub async fn find_by_item_ids(
        pool: &PgPool,
        item_ids: &[String],
    ) -> Result<Vec<Stock>, sqlx::Error> {
        let native: Result<Vec<DbId>, _> = item_ids.iter().map(|s| s.parse::<DbId>()).collect();
        match native {
            Ok(ids) => {
                let query = format!("SELECT {COLUMNS} FROM stocks WHERE id = ANY($1) ORDER BY id");
                sqlx::query_as::<_, Stock>(&query)
                    .bind(&ids)
                    .fetch_all(pool)
                    .await
            }
            Err(_) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM stocks WHERE id::text = ANY($1) ORDER BY id"
                );
                sqlx::query_as::<_, Stock>(&query)
                    .bind(item_ids)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
