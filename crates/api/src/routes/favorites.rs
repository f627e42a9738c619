//! Route definitions for the favorites subsystem, mounted at `/api/favorites`.
//!
//! ```text
//! POST   /                -> add_favorite
//! GET    /                -> list_favorites
//! DELETE /{item_id}       -> remove_favorite (userId/type query params)
//! POST   /rpc/add         -> add_favorite (alias)
//! POST   /rpc/remove      -> remove_favorite_rpc
//! GET    /stocks          -> favorite_stocks
//! GET    /funds           -> favorite_funds
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(favorites::add_favorite).get(favorites::list_favorites),
        )
        .route("/{item_id}", delete(favorites::remove_favorite))
        // RPC aliases: same handlers, same effects, same response shapes.
        .route("/rpc/add", post(favorites::add_favorite))
        .route("/rpc/remove", post(favorites::remove_favorite_rpc))
        .route("/stocks", get(favorites::favorite_stocks))
        .route("/funds", get(favorites::favorite_funds))
}
