//! In-memory storage

use std::{collections::BTreeMap, sync::Arc};

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    domain::{carts::records::CartRecord, items::records::ItemRecord},
    ids::{Sequence, TypedId},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no row with id {0}")]
    RowNotFound(u64),
}

/// Rows of a single record type keyed by their allocated id.
///
/// Ids come from the table's own [`Sequence`], so key order is creation order.
#[derive(Debug)]
pub struct Table<R> {
    rows: BTreeMap<TypedId<R>, R>,
    ids: Sequence<R>,
}

impl<R> Table<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            ids: Sequence::new(),
        }
    }

    /// Allocate an id and store the row built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(TypedId<R>) -> R) -> &mut R {
        let id = self.ids.next_id();

        self.rows.entry(id).or_insert(build(id))
    }

    /// Fetch a row, or fail with [`StoreError::RowNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error when no row exists for `id`.
    pub fn fetch_one(&self, id: TypedId<R>) -> Result<&R, StoreError> {
        self.rows
            .get(&id)
            .ok_or(StoreError::RowNotFound(id.into_u64()))
    }

    /// Fetch a row for modification, or fail with [`StoreError::RowNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error when no row exists for `id`.
    pub fn fetch_one_mut(&mut self, id: TypedId<R>) -> Result<&mut R, StoreError> {
        self.rows
            .get_mut(&id)
            .ok_or(StoreError::RowNotFound(id.into_u64()))
    }

    /// Rows in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }

    /// Rows in creation order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut R> {
        self.rows.values_mut()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide state: the catalog and the carts.
#[derive(Debug, Default)]
pub struct Store {
    pub items: Table<ItemRecord>,
    pub carts: Table<CartRecord>,
}

/// Shared handle to the [`Store`].
///
/// A single lock guards both tables and both id sequences, so every operation
/// that takes it sees and leaves a consistent store.
#[derive(Debug, Clone, Default)]
pub struct Db {
    store: Arc<Mutex<Store>>,
}

impl Db {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire exclusive access to the store.
    pub async fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().await
    }
}
