//! Favorite item classification.
//!
//! A favorite bookmarks either a stock (referenced by its database id) or a
//! fund (referenced by its `unique_id` business key). The two identifier
//! spaces never mix; `item_id` stays an opaque string and each resolution
//! path picks its own lookup strategy.

use serde::{Deserialize, Serialize};

/// The two kinds of item a user can favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Stock,
    Fund,
}

impl ItemType {
    /// The wire/storage representation (`"stock"` / `"fund"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Stock => "stock",
            ItemType::Fund => "fund",
        }
    }

    /// Strict parse used on write paths. Only the exact strings
    /// `"stock"` and `"fund"` are accepted.
    pub fn parse_strict(s: &str) -> Option<ItemType> {
        match s {
            "stock" => Some(ItemType::Stock),
            "fund" => Some(ItemType::Fund),
            _ => None,
        }
    }

    /// Lenient partition key used on read paths: anything that is not
    /// exactly `"stock"` is treated as a fund. Writes are validated to
    /// `stock`/`fund`, so the fallback arm is unreachable for rows created
    /// through the API; it still decides where unexpected legacy values land.
    pub fn partition_key(s: &str) -> ItemType {
        if s == "stock" {
            ItemType::Stock
        } else {
            ItemType::Fund
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
