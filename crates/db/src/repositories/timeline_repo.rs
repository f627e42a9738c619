//! Repository for the `stock_timelines` table.

use sqlx::PgPool;

use crate::models::timeline::StockTimeline;

/// Provides lookup operations for stock price timelines.
pub struct TimelineRepo;

impl TimelineRepo {
    /// Get the timeline document for a stock, keyed by the stock id as text.
    pub async fn get(pool: &PgPool, stock_id: &str) -> Result<Option<StockTimeline>, sqlx::Error> {
        sqlx::query_as::<_, StockTimeline>(
            "SELECT stock_id, timeline FROM stock_timelines WHERE stock_id = $1",
        )
        .bind(stock_id)
        .fetch_optional(pool)
        .await
    }

    /// Insert or replace the timeline document for a stock.
    pub async fn upsert(
        pool: &PgPool,
        stock_id: &str,
        timeline: &serde_json::Value,
    ) -> Result<StockTimeline, sqlx::Error> {
        sqlx::query_as::<_, StockTimeline>(
            "INSERT INTO stock_timelines (stock_id, timeline) \
             VALUES ($1, $2) \
             ON CONFLICT (stock_id) DO UPDATE SET timeline = EXCLUDED.timeline \
             RETURNING stock_id, timeline",
        )
        .bind(stock_id)
        .bind(timeline)
        .fetch_one(pool)
        .await
    }
}
