//! Item Models

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use shop_app::domain::items::records::ItemRecord;

/// Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The unique identifier of the item
    pub id: u64,

    /// The display name of the item
    pub name: String,

    /// The unit price of the item
    pub price: f64,

    /// Whether the item has been soft-deleted
    pub deleted: bool,
}

impl From<ItemRecord> for ItemResponse {
    fn from(item: ItemRecord) -> Self {
        Self {
            id: item.id.into_u64(),
            name: item.name,
            price: item.price,
            deleted: item.deleted,
        }
    }
}

/// Reject prices that are negative or not a number.
pub(crate) fn ensure_price(price: f64) -> Result<f64, StatusError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(StatusError::unprocessable_entity().brief("price must be non-negative"))
    }
}
