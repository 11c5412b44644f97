//! Cart Records

use crate::{
    domain::{
        carts::aggregate::Aggregate,
        items::records::{ItemId, ItemRecord},
    },
    ids::TypedId,
};

/// Cart Id
pub type CartId = TypedId<CartRecord>;

/// Cart Record
///
/// `price` and `quantity` are a cache of the last aggregation, not a source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub id: CartId,
    pub lines: Vec<CartLineRecord>,
    pub price: f64,
    pub quantity: u64,
}

impl CartRecord {
    #[must_use]
    pub const fn empty(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            price: 0.0,
            quantity: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn line(&self, item: ItemId) -> Option<&CartLineRecord> {
        self.lines.iter().find(|line| line.item == item)
    }

    /// Add one unit of `item`, merging into its existing line if there is one.
    ///
    /// A new line snapshots the item's name and availability; both are refreshed on
    /// the next aggregation anyway.
    pub fn add_unit(&mut self, item: &ItemRecord) -> CartLineRecord {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item == item.id) {
            line.quantity += 1;

            return line.clone();
        }

        let line = CartLineRecord {
            item: item.id,
            name: item.name.clone(),
            quantity: 1,
            available: item.is_active(),
        };

        self.lines.push(line.clone());

        line
    }

    /// Replace lines and totals with a freshly computed aggregate.
    pub fn apply(&mut self, aggregate: Aggregate) {
        self.lines = aggregate.lines;
        self.price = aggregate.price;
        self.quantity = aggregate.quantity;
    }
}

/// Cart Line Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub item: ItemId,
    pub name: String,
    pub quantity: u64,
    pub available: bool,
}
