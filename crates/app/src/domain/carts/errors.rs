//! Carts service errors.

use thiserror::Error;

use crate::{
    database::StoreError,
    domain::{carts::records::CartId, items::records::ItemId},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("cart {0} not found")]
    CartNotFound(CartId),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),
}

impl CartsServiceError {
    pub(crate) fn missing_item(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound(id) => Self::ItemNotFound(ItemId::from_u64(id)),
        }
    }
}

impl From<StoreError> for CartsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound(id) => Self::CartNotFound(CartId::from_u64(id)),
        }
    }
}
