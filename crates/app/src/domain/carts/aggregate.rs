//! Cart aggregation against the item catalog.

use crate::{
    database::Table,
    domain::{carts::records::CartLineRecord, items::records::ItemRecord},
};

/// Cart lines and totals recomputed from the current catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub lines: Vec<CartLineRecord>,
    pub price: f64,
    pub quantity: u64,
}

impl Aggregate {
    /// Join `lines` against `items`.
    ///
    /// A line whose item exists and is active becomes available, takes the item's
    /// current name and adds `price * quantity` and `quantity` to the totals. Any
    /// other line is unavailable, keeps its cached name and adds nothing.
    pub fn compute(lines: &[CartLineRecord], items: &Table<ItemRecord>) -> Self {
        let mut aggregate = Self {
            lines: Vec::with_capacity(lines.len()),
            price: 0.0,
            quantity: 0,
        };

        for line in lines {
            let mut line = line.clone();

            match items.fetch_one(line.item) {
                Ok(item) if item.is_active() => {
                    line.available = true;
                    line.name.clone_from(&item.name);

                    aggregate.price += line_total(item.price, line.quantity);
                    aggregate.quantity += line.quantity;
                }
                Ok(_) | Err(_) => line.available = false,
            }

            aggregate.lines.push(line);
        }

        aggregate
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "cart quantities are far below 2^52."
)]
fn line_total(price: f64, quantity: u64) -> f64 {
    price * quantity as f64
}
