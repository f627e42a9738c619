//! Stock entity model.

use mfapi_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full stock row from the `stocks` table.
///
/// The id serializes as `_id`: the client contract predates this service and
/// addresses stock records by that key.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub created_at: Timestamp,
}
