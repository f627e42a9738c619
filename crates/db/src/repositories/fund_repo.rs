//! Repository for the `fund_holdings` table.
//!
//! Funds have no table of their own: a fund is the set of dated snapshots
//! sharing a `unique_id` business key. Listing aggregates the snapshots for
//! one date; resolution by business key returns raw snapshot rows.

use sqlx::PgPool;

use crate::models::fund::{FundDateCount, FundHolding, FundSummary};

/// Column list for `fund_holdings` queries.
const COLUMNS: &str = "\
    id, unique_id, name, date, holding_count, added_count, removed_count, created_at";

/// Columns the aggregated fund listing may be sorted by.
const SORTABLE: &[&str] = &[
    "holding_count",
    "added_count",
    "removed_count",
    "name",
    "latest_date",
];

/// Provides aggregation and lookup operations for fund holdings.
pub struct FundRepo;

impl FundRepo {
    /// Insert one holdings snapshot.
    pub async fn insert_snapshot(
        pool: &PgPool,
        unique_id: &str,
        name: &str,
        date: &str,
        holding_count: i32,
        added_count: i32,
        removed_count: i32,
    ) -> Result<FundHolding, sqlx::Error> {
        let query = format!(
            "INSERT INTO fund_holdings \
                 (unique_id, name, date, holding_count, added_count, removed_count) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FundHolding>(&query)
            .bind(unique_id)
            .bind(name)
            .bind(date)
            .bind(holding_count)
            .bind(added_count)
            .bind(removed_count)
            .fetch_one(pool)
            .await
    }

    /// The most recent snapshot date present, if any.
    pub async fn latest_date(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT date FROM fund_holdings ORDER BY date DESC LIMIT 1")
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(date,)| date))
    }

    /// Total snapshot rows for one date (the listing's `count`).
    pub async fn count_for_date(pool: &PgPool, date: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM fund_holdings WHERE date = $1")
                .bind(date)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Aggregate the snapshots for one date into one row per fund, with
    /// whitelisted sorting and pagination.
    pub async fn summaries_for_date(
        pool: &PgPool,
        date: &str,
        sort_by: &str,
        order: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<FundSummary>, sqlx::Error> {
        let col = if SORTABLE.contains(&sort_by) { sort_by } else { "holding_count" };
        let dir = if order == "asc" { "ASC" } else { "DESC" };
        let query = format!(
            "SELECT unique_id, \
                    MIN(name) AS name, \
                    MAX(holding_count) AS holding_count, \
                    MAX(added_count) AS added_count, \
                    MAX(removed_count) AS removed_count, \
                    MAX(date) AS latest_date \
             FROM fund_holdings \
             WHERE date = $1 \
             GROUP BY unique_id \
             ORDER BY {col} {dir} \
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, FundSummary>(&query)
            .bind(date)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Per-date holding counts for one fund, oldest first.
    pub async fn date_counts(
        pool: &PgPool,
        unique_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<FundDateCount>, sqlx::Error> {
        sqlx::query_as::<_, FundDateCount>(
            "SELECT date, holding_count FROM fund_holdings \
             WHERE unique_id = $1 AND ($2::text IS NULL OR date = $2) \
             ORDER BY date",
        )
        .bind(unique_id)
        .bind(date)
        .fetch_all(pool)
        .await
    }

    /// The most recent snapshot for one fund, optionally pinned to a date.
    pub async fn latest_snapshot(
        pool: &PgPool,
        unique_id: &str,
        date: Option<&str>,
    ) -> Result<Option<FundHolding>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fund_holdings \
             WHERE unique_id = $1 AND ($2::text IS NULL OR date = $2) \
             ORDER BY date DESC LIMIT 1"
        );
        sqlx::query_as::<_, FundHolding>(&query)
            .bind(unique_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Resolve favorite item ids (fund business keys) to snapshot rows.
    ///
    /// Keys with no matching rows are silently dropped from the result.
    pub async fn find_by_unique_ids(
        pool: &PgPool,
        unique_ids: &[String],
    ) -> Result<Vec<FundHolding>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fund_holdings WHERE unique_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, FundHolding>(&query)
            .bind(unique_ids)
            .fetch_all(pool)
            .await
    }
}
