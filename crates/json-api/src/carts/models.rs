//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shop_app::domain::carts::records::{CartLineRecord, CartRecord};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub id: u64,

    /// The lines in the cart, in the order they were first added
    pub items: Vec<CartLineResponse>,

    /// Total price of the available lines
    pub price: f64,

    /// Total quantity of the available lines
    pub quantity: u64,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            id: cart.id.into_u64(),
            items: cart.lines.into_iter().map(Into::into).collect(),
            price: cart.price,
            quantity: cart.quantity,
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The item identifier
    pub id: u64,

    /// Item name as of the last read
    pub name: String,

    /// Units of the item in the cart
    pub quantity: u64,

    /// Whether the item still exists and is not deleted
    pub available: bool,
}

impl From<CartLineRecord> for CartLineResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            id: line.item.into_u64(),
            name: line.name,
            quantity: line.quantity,
            available: line.available,
        }
    }
}
