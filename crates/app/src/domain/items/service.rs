//! Items service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::items::{
        data::{ItemFilter, ItemPatch, ItemReplacement, NewItem},
        errors::ItemsServiceError,
        records::{DeleteOutcome, ItemId, ItemRecord},
        repository::MemoryItemsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MemoryItemsService {
    db: Db,
    repository: MemoryItemsRepository,
}

impl MemoryItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: MemoryItemsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsService for MemoryItemsService {
    async fn create_item(&self, item: NewItem) -> ItemRecord {
        let mut store = self.db.lock().await;

        let created = self.repository.create_item(&mut store.items, item);

        debug!(item_id = %created.id, "created item");

        created
    }

    async fn get_item(&self, item: ItemId) -> Result<ItemRecord, ItemsServiceError> {
        let store = self.db.lock().await;

        let record = self.repository.get_item(&store.items, item)?;

        if !record.is_active() {
            return Err(ItemsServiceError::NotFound(item));
        }

        Ok(record.clone())
    }

    async fn list_items(&self, filter: ItemFilter) -> Vec<ItemRecord> {
        let store = self.db.lock().await;

        self.repository.list_items(&store.items, &filter)
    }

    async fn replace_item(
        &self,
        item: ItemId,
        replacement: ItemReplacement,
    ) -> Result<ItemRecord, ItemsServiceError> {
        let mut store = self.db.lock().await;

        let record = self.repository.get_item_mut(&mut store.items, item)?;

        ensure_modifiable(record)?;

        record.name = replacement.name;
        record.price = replacement.price;

        Ok(record.clone())
    }

    async fn update_item(
        &self,
        item: ItemId,
        patch: ItemPatch,
    ) -> Result<ItemRecord, ItemsServiceError> {
        let mut store = self.db.lock().await;

        let record = self.repository.get_item_mut(&mut store.items, item)?;

        ensure_modifiable(record)?;

        if patch.deleted.is_some() {
            return Err(ItemsServiceError::ProtectedField);
        }

        if let Some(name) = patch.name {
            record.name = name;
        }

        if let Some(price) = patch.price {
            record.price = price;
        }

        Ok(record.clone())
    }

    async fn delete_item(&self, item: ItemId) -> DeleteOutcome {
        let mut store = self.db.lock().await;

        let outcome = self.repository.delete_item(&mut store.items, item);

        debug!(item_id = %item, ?outcome, "deleted item");

        outcome
    }
}

fn ensure_modifiable(item: &ItemRecord) -> Result<(), ItemsServiceError> {
    if item.is_active() {
        Ok(())
    } else {
        Err(ItemsServiceError::Unmodifiable(item.id))
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Creates a new item and assigns it the next item id.
    async fn create_item(&self, item: NewItem) -> ItemRecord;

    /// Retrieve a single item. Soft-deleted items are reported as not found.
    async fn get_item(&self, item: ItemId) -> Result<ItemRecord, ItemsServiceError>;

    /// Retrieves a filtered page of items in creation order.
    async fn list_items(&self, filter: ItemFilter) -> Vec<ItemRecord>;

    /// Overwrites the name and price of an active item.
    async fn replace_item(
        &self,
        item: ItemId,
        replacement: ItemReplacement,
    ) -> Result<ItemRecord, ItemsServiceError>;

    /// Applies the supplied fields to an active item. An empty patch is a no-op.
    async fn update_item(
        &self,
        item: ItemId,
        patch: ItemPatch,
    ) -> Result<ItemRecord, ItemsServiceError>;

    /// Soft-deletes an item. Never fails; repeated deletes report `AlreadyDeleted`.
    async fn delete_item(&self, item: ItemId) -> DeleteOutcome;
}
