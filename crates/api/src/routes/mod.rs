pub mod favorites;
pub mod funds;
pub mod health;
pub mod stocks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (everything except the root-level health routes).
///
/// Route hierarchy:
///
/// ```text
/// /api/users                      create (POST), lookup by email (GET)
/// /api/users/all                  list all users
/// /api/users/{id}                 get, update, delete
///
/// /api/favorites                  add (POST), partitioned listing (GET)
/// /api/favorites/{item_id}        remove (DELETE, userId/type query params)
/// /api/favorites/rpc/add          add alias (POST)
/// /api/favorites/rpc/remove       remove via JSON body (POST)
/// /api/favorites/stocks           resolved favorite stocks (GET)
/// /api/favorites/funds            resolved favorite funds (GET)
///
/// /getAllFunds                    aggregated fund listing (GET)
/// /getFundInfo                    fund detail + history (GET)
/// /getAllStocks                   stock listing/search (GET)
/// /getStockInfo                   stock detail (GET)
/// /getStockTimeline               stock price timeline (GET)
/// ```
///
/// The legacy top-level fund/stock paths predate this service; the client
/// addresses them without an `/api` prefix.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/api/users", users::router())
        .nest("/api/favorites", favorites::router())
        .merge(funds::router())
        .merge(stocks::router())
}
