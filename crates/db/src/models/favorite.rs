//! Favorite entity model and DTOs.

use mfapi_core::favorites::ItemType;
use mfapi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Full favorite row from the `favorites` table.
///
/// `item_id` is an opaque string: the decimal database id of a stock, or a
/// fund's `unique_id` business key. `item_type` is stored as text; writes are
/// validated to `stock`/`fund`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: String,
    pub item_id: String,
    pub item_type: String,
    pub item_name: String,
    pub created_at: Timestamp,
}

/// Request body for adding a favorite (`POST /api/favorites` and the RPC alias).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    #[validate(length(min = 1, message = "Shorter than minimum length 1."))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Shorter than minimum length 1."))]
    pub item_id: String,
    #[validate(custom(function = validate_item_type, message = "Must be one of: stock, fund."))]
    pub item_type: String,
    #[validate(length(max = 500, message = "Longer than maximum length 500."))]
    pub item_name: Option<String>,
}

/// Request body for the RPC-style remove (`POST /api/favorites/rpc/remove`).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteRequest {
    #[validate(length(min = 1, message = "Shorter than minimum length 1."))]
    pub user_id: String,
    #[validate(length(min = 1, message = "Shorter than minimum length 1."))]
    pub item_id: String,
    #[validate(custom(function = validate_item_type, message = "Must be one of: stock, fund."))]
    pub item_type: String,
}

fn validate_item_type(value: &str) -> Result<(), ValidationError> {
    match ItemType::parse_strict(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("item_type")),
    }
}

/// One entry in the partitioned favorites listing: the favorited item's id
/// and its denormalized display name (empty string when none was stored).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub name: String,
}

/// Favorites for a user partitioned by item type.
#[derive(Debug, Default, Serialize)]
pub struct FavoritesByType {
    pub stocks: Vec<FavoriteEntry>,
    pub funds: Vec<FavoriteEntry>,
}

impl FavoritesByType {
    /// Partition favorite rows into stock and fund entries.
    ///
    /// The partition key is lenient: any `item_type` other than exactly
    /// `"stock"` lands in the fund bucket (see [`ItemType::partition_key`]).
    pub fn partition(favorites: &[Favorite]) -> Self {
        let mut by_type = Self::default();
        for f in favorites {
            let entry = FavoriteEntry {
                id: f.item_id.clone(),
                name: f.item_name.clone(),
            };
            match ItemType::partition_key(&f.item_type) {
                ItemType::Stock => by_type.stocks.push(entry),
                ItemType::Fund => by_type.funds.push(entry),
            }
        }
        by_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_request(user_id: &str, item_id: &str, item_type: &str) -> AddFavoriteRequest {
        AddFavoriteRequest {
            user_id: user_id.into(),
            item_id: item_id.into(),
            item_type: item_type.into(),
            item_name: None,
        }
    }

    #[test]
    fn add_request_rejects_unknown_item_type() {
        let req = add_request("u1", "42", "bond");
        let errors = req.validate().unwrap_err();
        let report = mfapi_core::validation::error_report(&errors);
        assert_eq!(report["itemType"], vec!["Must be one of: stock, fund."]);
    }

    #[test]
    fn add_request_rejects_empty_required_fields() {
        let req = add_request("", "", "stock");
        let errors = req.validate().unwrap_err();
        let report = mfapi_core::validation::error_report(&errors);
        assert!(report.contains_key("userId"));
        assert!(report.contains_key("itemId"));
        assert!(!report.contains_key("itemType"));
    }

    #[test]
    fn add_request_caps_item_name_length() {
        let mut req = add_request("u1", "42", "fund");
        req.item_name = Some("x".repeat(501));
        let errors = req.validate().unwrap_err();
        let report = mfapi_core::validation::error_report(&errors);
        assert_eq!(report["itemName"], vec!["Longer than maximum length 500."]);

        req.item_name = Some("x".repeat(500));
        assert!(req.validate().is_ok());
    }

    fn favorite(item_id: &str, item_type: &str, name: &str) -> Favorite {
        Favorite {
            id: 1,
            user_id: "u1".into(),
            item_id: item_id.into(),
            item_type: item_type.into(),
            item_name: name.into(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn partition_splits_by_item_type() {
        let rows = vec![
            favorite("1", "stock", "Apple"),
            favorite("FUND-1", "fund", "Index One"),
            favorite("2", "stock", ""),
        ];
        let by_type = FavoritesByType::partition(&rows);
        assert_eq!(by_type.stocks.len(), 2);
        assert_eq!(by_type.funds.len(), 1);
        assert_eq!(by_type.stocks[0].name, "Apple");
        assert_eq!(by_type.funds[0].id, "FUND-1");
    }

    #[test]
    fn partition_routes_unexpected_types_to_funds() {
        let rows = vec![favorite("9", "bond", "Legacy")];
        let by_type = FavoritesByType::partition(&rows);
        assert!(by_type.stocks.is_empty());
        assert_eq!(by_type.funds.len(), 1);
    }
}
