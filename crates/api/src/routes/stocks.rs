//! Route definitions for the legacy top-level stock endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::stocks;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllStocks", get(stocks::get_all_stocks))
        .route("/getStockInfo", get(stocks::get_stock_info))
        .route("/getStockTimeline", get(stocks::get_stock_timeline))
}
