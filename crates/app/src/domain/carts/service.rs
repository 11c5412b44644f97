//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::CartFilter,
            errors::CartsServiceError,
            records::{CartId, CartLineRecord, CartRecord},
            repository::MemoryCartsRepository,
        },
        items::records::ItemId,
    },
};

#[derive(Debug, Clone)]
pub struct MemoryCartsService {
    db: Db,
    repository: MemoryCartsRepository,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: MemoryCartsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for MemoryCartsService {
    async fn create_cart(&self) -> CartRecord {
        let mut store = self.db.lock().await;

        let created = self.repository.create_cart(&mut store.carts);

        debug!(cart_id = %created.id, "created cart");

        created
    }

    async fn get_cart(&self, cart: CartId) -> Result<CartRecord, CartsServiceError> {
        let mut store = self.db.lock().await;

        let refreshed = self.repository.refresh_cart(&mut store, cart)?;

        Ok(refreshed.clone())
    }

    async fn list_carts(&self, filter: CartFilter) -> Vec<CartRecord> {
        let mut store = self.db.lock().await;

        self.repository.refresh_and_list_carts(&mut store, &filter)
    }

    async fn add_item(
        &self,
        cart: CartId,
        item: ItemId,
    ) -> Result<CartLineRecord, CartsServiceError> {
        let mut store = self.db.lock().await;
        let store = &mut *store;

        let cart = store.carts.fetch_one_mut(cart)?;

        let item = store
            .items
            .fetch_one(item)
            .map_err(CartsServiceError::missing_item)?;

        let line = cart.add_unit(item);

        debug!(
            cart_id = %cart.id,
            item_id = %line.item,
            quantity = line.quantity,
            "added item to cart"
        );

        Ok(line)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a new empty cart and assigns it the next cart id.
    async fn create_cart(&self) -> CartRecord;

    /// Retrieve a single cart with its totals recomputed against the catalog.
    ///
    /// The recomputed lines and totals are written back to the stored cart.
    async fn get_cart(&self, cart: CartId) -> Result<CartRecord, CartsServiceError>;

    /// Refreshes every cart, then returns a filtered page in creation order.
    async fn list_carts(&self, filter: CartFilter) -> Vec<CartRecord>;

    /// Add one unit of an item to the given cart. Deleted items may still be added.
    async fn add_item(
        &self,
        cart: CartId,
        item: ItemId,
    ) -> Result<CartLineRecord, CartsServiceError>;
}
