//! Handlers for the fund listing and detail endpoints.
//!
//! Fund identity is the `unique_id` business key; a fund's data is the set
//! of dated holding snapshots sharing that key.

use axum::extract::{Query, State};
use mfapi_db::models::fund::FundInfo;
use mfapi_db::repositories::{clamp_limit, clamp_skip, FundRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for `GET /getAllFunds`.
#[derive(Debug, Deserialize)]
pub struct AllFundsParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub date: Option<String>,
}

/// Query parameters for `GET /getFundInfo`.
#[derive(Debug, Deserialize)]
pub struct FundInfoParams {
    pub fund_id: Option<String>,
    pub date: Option<String>,
}

/// GET /getAllFunds?skip=&limit=&sort_by=&order=&date=
///
/// One aggregated row per fund for the requested snapshot date (latest date
/// on record when omitted). `count` is the total snapshot rows for that
/// date, not the page size.
pub async fn get_all_funds(
    State(state): State<AppState>,
    Query(params): Query<AllFundsParams>,
) -> AppResult<Envelope> {
    let date = match params.date {
        Some(date) => date,
        None => FundRepo::latest_date(&state.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("No records found".into()))?,
    };

    let total = FundRepo::count_for_date(&state.pool, &date).await?;
    let summaries = FundRepo::summaries_for_date(
        &state.pool,
        &date,
        params.sort_by.as_deref().unwrap_or("holding_count"),
        params.order.as_deref().unwrap_or("desc"),
        clamp_skip(params.skip),
        clamp_limit(params.limit),
    )
    .await?;

    Ok(Envelope::success("Funds fetched")
        .records(serde_json::to_value(summaries)?)
        .count(total))
}

/// GET /getFundInfo?fund_id=&date=
///
/// The fund's most recent snapshot (optionally pinned to a date) plus its
/// per-date holding-count history under `fund_count`.
pub async fn get_fund_info(
    State(state): State<AppState>,
    Query(params): Query<FundInfoParams>,
) -> AppResult<Envelope> {
    let fund_id = params
        .fund_id
        .ok_or_else(|| AppError::BadRequest("fund_id required".into()))?;
    let date = params.date.as_deref();

    let fund_count = FundRepo::date_counts(&state.pool, &fund_id, date).await?;
    let latest = FundRepo::latest_snapshot(&state.pool, &fund_id, date)
        .await?
        .ok_or_else(|| AppError::NotFound("Fund not found".into()))?;

    let info = FundInfo { latest, fund_count };

    Ok(Envelope::success("Fund info fetched").records(serde_json::to_value(info)?))
}
