//! Carts Repository

use crate::{
    database::{Store, StoreError, Table},
    domain::carts::{
        aggregate::Aggregate,
        data::CartFilter,
        records::{CartId, CartRecord},
    },
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryCartsRepository;

impl MemoryCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn create_cart(&self, carts: &mut Table<CartRecord>) -> CartRecord {
        carts.insert_with(CartRecord::empty).clone()
    }

    /// Recompute one cart against the catalog and store the result on the cart.
    ///
    /// This is the only place cached cart totals are written.
    pub(crate) fn refresh_cart<'s>(
        &self,
        store: &'s mut Store,
        cart: CartId,
    ) -> Result<&'s CartRecord, StoreError> {
        let Store { items, carts } = store;

        let cart = carts.fetch_one_mut(cart)?;

        cart.apply(Aggregate::compute(&cart.lines, items));

        Ok(cart)
    }

    /// Refresh every cart, then return the filtered page.
    pub(crate) fn refresh_and_list_carts(
        &self,
        store: &mut Store,
        filter: &CartFilter,
    ) -> Vec<CartRecord> {
        let Store { items, carts } = store;

        for cart in carts.iter_mut() {
            cart.apply(Aggregate::compute(&cart.lines, items));
        }

        filter
            .page
            .slice(carts.iter().filter(|cart| filter.matches(cart)))
            .cloned()
            .collect()
    }
}
