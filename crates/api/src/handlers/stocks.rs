//! Handlers for stock listing, detail, and price timeline endpoints.

use axum::extract::{Query, State};
use mfapi_core::types::DbId;
use mfapi_db::repositories::{clamp_limit, clamp_skip, StockRepo, TimelineRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for `GET /getAllStocks`.
#[derive(Debug, Deserialize)]
pub struct AllStocksParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

/// Query parameter for the stock detail and timeline endpoints.
#[derive(Debug, Deserialize)]
pub struct StockIdParam {
    pub stock_id: Option<String>,
}

/// GET /getAllStocks?skip=&limit=&sort_by=&order=&search=
///
/// Paginated stock listing with case-insensitive name search. `count` is
/// the total matching rows, not the page size.
pub async fn get_all_stocks(
    State(state): State<AppState>,
    Query(params): Query<AllStocksParams>,
) -> AppResult<Envelope> {
    let search = params.search.as_deref().unwrap_or("").trim();

    let total = StockRepo::count(&state.pool, search).await?;
    let stocks = StockRepo::list(
        &state.pool,
        search,
        params.sort_by.as_deref().unwrap_or("name"),
        params.order.as_deref().unwrap_or("asc"),
        clamp_skip(params.skip),
        clamp_limit(params.limit),
    )
    .await?;

    Ok(Envelope::success("Stocks fetched")
        .records(serde_json::to_value(stocks)?)
        .count(total))
}

/// GET /getStockInfo?stock_id=
///
/// Stock detail by database id. An id that does not parse as a database id
/// cannot address any record, so it reports not-found like an absent one.
pub async fn get_stock_info(
    State(state): State<AppState>,
    Query(params): Query<StockIdParam>,
) -> AppResult<Envelope> {
    let stock_id = params
        .stock_id
        .ok_or_else(|| AppError::BadRequest("stock_id required".into()))?;

    let stock = match stock_id.parse::<DbId>() {
        Ok(id) => StockRepo::get(&state.pool, id).await?,
        Err(_) => None,
    }
    .ok_or_else(|| AppError::NotFound("Stock not found".into()))?;

    Ok(Envelope::success("Stock fetched").records(serde_json::to_value(stock)?))
}

/// GET /getStockTimeline?stock_id=
///
/// Price timeline document for a stock, keyed by the stock id as text.
pub async fn get_stock_timeline(
    State(state): State<AppState>,
    Query(params): Query<StockIdParam>,
) -> AppResult<Envelope> {
    let stock_id = params
        .stock_id
        .ok_or_else(|| AppError::BadRequest("stock_id required".into()))?;

    let timeline = TimelineRepo::get(&state.pool, &stock_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Timeline not found".into()))?;

    Ok(Envelope::success("Timeline fetched").records(serde_json::to_value(timeline)?))
}
