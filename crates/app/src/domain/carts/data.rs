//! Cart Data

use crate::domain::{
    carts::records::CartRecord,
    listing::{Bounds, Page},
};

/// Cart Listing Filter
///
/// Bounds apply to the totals as recomputed at listing time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartFilter {
    pub page: Page,
    pub price: Bounds<f64>,
    pub quantity: Bounds<u64>,
}

impl CartFilter {
    #[must_use]
    pub fn matches(&self, cart: &CartRecord) -> bool {
        self.price.contains(&cart.price) && self.quantity.contains(&cart.quantity)
    }
}
