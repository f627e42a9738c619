//! Handlers for the favorites subsystem.
//!
//! A favorite links a user (external identity, opaque string) to a stock or
//! fund item. The (user, item, type) triple is unique at the store level;
//! adding an existing favorite is a success, not a conflict. Mutations have
//! RPC-style aliases that must match their REST counterparts byte for byte.

use axum::extract::{Path, Query, State};
use axum::Json;
use mfapi_core::favorites::ItemType;
use mfapi_db::models::favorite::{AddFavoriteRequest, FavoritesByType, RemoveFavoriteRequest};
use mfapi_db::repositories::{AddOutcome, FavoriteRepo, FundRepo, StockRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_payload;
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for the favorites listing.
#[derive(Debug, Deserialize)]
pub struct ListFavoritesParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Query parameters for the REST-style remove.
#[derive(Debug, Deserialize)]
pub struct RemoveFavoriteParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// Query parameter shared by the resolution endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdParam {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// POST /api/favorites (also aliased at /api/favorites/rpc/add)
///
/// Add an item to the user's favorites. Adding an item that is already
/// favorited is a no-op success with a distinguishing message.
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(input): Json<AddFavoriteRequest>,
) -> AppResult<Envelope> {
    validate_payload(&input)?;

    let item_name = input.item_name.as_deref().unwrap_or("");
    let outcome = FavoriteRepo::add(
        &state.pool,
        &input.user_id,
        &input.item_id,
        &input.item_type,
        item_name,
    )
    .await?;

    match outcome {
        AddOutcome::Created(favorite) => {
            tracing::info!(
                user_id = %favorite.user_id,
                item_type = %favorite.item_type,
                item_id = %favorite.item_id,
                "Favorite added",
            );
            Ok(Envelope::success("Added").data(serde_json::to_value(favorite)?))
        }
        AddOutcome::AlreadyExists => {
            tracing::info!(
                user_id = %input.user_id,
                item_type = %input.item_type,
                item_id = %input.item_id,
                "Favorite already exists",
            );
            Ok(Envelope::success("Already in favorites"))
        }
    }
}

/// GET /api/favorites?userId=&type=
///
/// List a user's favorites partitioned into stock and fund entries.
/// `count` is the number of underlying favorite rows, both lists combined.
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<ListFavoritesParams>,
) -> AppResult<Envelope> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId required".into()))?;

    let favorites =
        FavoriteRepo::list_for_user(&state.pool, &user_id, params.item_type.as_deref()).await?;
    let by_type = FavoritesByType::partition(&favorites);

    Ok(Envelope::success("Favorites fetched")
        .data(serde_json::to_value(by_type)?)
        .count(favorites.len() as i64))
}

/// DELETE /api/favorites/{item_id}?userId=&type=
///
/// REST-style remove: item id in the path, user and type as query
/// parameters. Must produce the same effect and shape as the RPC remove.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Query(params): Query<RemoveFavoriteParams>,
) -> AppResult<Envelope> {
    let (user_id, item_type) = match (params.user_id, params.item_type) {
        (Some(user_id), Some(item_type)) => (user_id, item_type),
        _ => return Err(AppError::BadRequest("userId and type required".into())),
    };

    remove(&state, &user_id, &item_id, &item_type).await
}

/// POST /api/favorites/rpc/remove
///
/// RPC-style remove taking the full triple as a validated JSON body.
pub async fn remove_favorite_rpc(
    State(state): State<AppState>,
    Json(input): Json<RemoveFavoriteRequest>,
) -> AppResult<Envelope> {
    validate_payload(&input)?;

    remove(&state, &input.user_id, &input.item_id, &input.item_type).await
}

/// Shared removal: both entry points delete at most one row and report
/// not-found identically.
async fn remove(
    state: &AppState,
    user_id: &str,
    item_id: &str,
    item_type: &str,
) -> AppResult<Envelope> {
    let removed = FavoriteRepo::remove(&state.pool, user_id, item_id, item_type).await?;

    if !removed {
        return Err(AppError::NotFound("Favorite not found".into()));
    }

    tracing::info!(user_id, item_type, item_id, "Favorite removed");
    Ok(Envelope::success("Removed"))
}

/// GET /api/favorites/stocks?userId=
///
/// Resolve the user's stock favorites into full stock records. Favorites
/// whose item id matches no stock are silently omitted, so the resolved
/// count may be smaller than the favorite count.
pub async fn favorite_stocks(
    State(state): State<AppState>,
    Query(params): Query<UserIdParam>,
) -> AppResult<Envelope> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId required".into()))?;

    let item_ids =
        FavoriteRepo::list_item_ids(&state.pool, &user_id, ItemType::Stock.as_str()).await?;
    if item_ids.is_empty() {
        return Ok(Envelope::success("No favorites")
            .count(0)
            .records(serde_json::Value::Array(vec![])));
    }

    let stocks = StockRepo::find_by_item_ids(&state.pool, &item_ids).await?;

    Ok(Envelope::success("Favorite stocks fetched")
        .count(stocks.len() as i64)
        .records(serde_json::to_value(stocks)?))
}

/// GET /api/favorites/funds?userId=
///
/// Resolve the user's fund favorites (item ids are fund business keys,
/// never database ids) into holding snapshot records. Same silent-omission
/// policy for orphans as the stock resolution.
pub async fn favorite_funds(
    State(state): State<AppState>,
    Query(params): Query<UserIdParam>,
) -> AppResult<Envelope> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId required".into()))?;

    let item_ids =
        FavoriteRepo::list_item_ids(&state.pool, &user_id, ItemType::Fund.as_str()).await?;
    if item_ids.is_empty() {
        return Ok(Envelope::success("No favorites")
            .count(0)
            .records(serde_json::Value::Array(vec![])));
    }

    let funds = FundRepo::find_by_unique_ids(&state.pool, &item_ids).await?;

    Ok(Envelope::success("Favorite funds fetched")
        .count(funds.len() as i64)
        .records(serde_json::to_value(funds)?))
}
