//! Items Repository

use crate::{
    database::{StoreError, Table},
    domain::items::{
        data::{ItemFilter, NewItem},
        records::{DeleteOutcome, ItemId, ItemRecord},
    },
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryItemsRepository;

impl MemoryItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn create_item(&self, items: &mut Table<ItemRecord>, item: NewItem) -> ItemRecord {
        items
            .insert_with(|id| ItemRecord {
                id,
                name: item.name,
                price: item.price,
                deleted: false,
            })
            .clone()
    }

    pub(crate) fn get_item<'t>(
        &self,
        items: &'t Table<ItemRecord>,
        item: ItemId,
    ) -> Result<&'t ItemRecord, StoreError> {
        items.fetch_one(item)
    }

    pub(crate) fn get_item_mut<'t>(
        &self,
        items: &'t mut Table<ItemRecord>,
        item: ItemId,
    ) -> Result<&'t mut ItemRecord, StoreError> {
        items.fetch_one_mut(item)
    }

    pub(crate) fn list_items(
        &self,
        items: &Table<ItemRecord>,
        filter: &ItemFilter,
    ) -> Vec<ItemRecord> {
        filter
            .page
            .slice(items.iter().filter(|item| filter.matches(item)))
            .cloned()
            .collect()
    }

    pub(crate) fn delete_item(&self, items: &mut Table<ItemRecord>, item: ItemId) -> DeleteOutcome {
        match items.fetch_one_mut(item) {
            Ok(record) if record.is_active() => {
                record.deleted = true;

                DeleteOutcome::Deleted
            }
            Ok(_) | Err(StoreError::RowNotFound(_)) => DeleteOutcome::AlreadyDeleted,
        }
    }
}
