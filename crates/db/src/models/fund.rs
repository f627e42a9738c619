//! Fund holding snapshot models.
//!
//! A fund is identified by its `unique_id` business key; each row of
//! `fund_holdings` is one dated snapshot of that fund's holdings. Fund
//! documents keep their ingestion-era snake_case field names on the wire.

use mfapi_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One dated holdings snapshot from the `fund_holdings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FundHolding {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub unique_id: String,
    pub name: String,
    pub date: String,
    pub holding_count: i32,
    pub added_count: i32,
    pub removed_count: i32,
    #[serde(skip)]
    pub created_at: Timestamp,
}

/// One fund aggregated across its snapshots for a given date
/// (`GET /getAllFunds`). The business key serializes as `_id`, mirroring the
/// grouped listing shape the client expects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FundSummary {
    #[serde(rename = "_id")]
    pub unique_id: String,
    pub name: String,
    pub holding_count: i32,
    pub added_count: i32,
    pub removed_count: i32,
    pub latest_date: String,
}

/// Per-date holding count for a single fund (`fund_count` in fund info).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FundDateCount {
    pub date: String,
    pub holding_count: i32,
}

/// Detailed fund info: the latest snapshot plus the per-date history.
#[derive(Debug, Serialize)]
pub struct FundInfo {
    #[serde(flatten)]
    pub latest: FundHolding,
    pub fund_count: Vec<FundDateCount>,
}
