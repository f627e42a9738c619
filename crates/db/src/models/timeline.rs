//! Stock price timeline model.

use serde::Serialize;
use sqlx::FromRow;

/// Timeline document for one stock, keyed by the stock's id rendered as text.
///
/// The timeline payload is schemaless JSON from the ingestion pipeline; its
/// fields are flattened next to `_id` on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockTimeline {
    #[serde(rename = "_id")]
    pub stock_id: String,
    #[serde(flatten)]
    pub timeline: serde_json::Value,
}
