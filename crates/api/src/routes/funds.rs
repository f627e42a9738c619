//! Route definitions for the legacy top-level fund endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::funds;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllFunds", get(funds::get_all_funds))
        .route("/getFundInfo", get(funds::get_fund_info))
}
