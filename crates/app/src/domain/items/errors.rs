//! Items service errors.

use thiserror::Error;

use crate::{database::StoreError, domain::items::records::ItemId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemsServiceError {
    #[error("item {0} not found")]
    NotFound(ItemId),

    #[error("item {0} is deleted and cannot be modified")]
    Unmodifiable(ItemId),

    #[error("the deleted flag cannot be set through an update")]
    ProtectedField,
}

impl From<StoreError> for ItemsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::RowNotFound(id) => Self::NotFound(ItemId::from_u64(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert_eq!(
            ItemsServiceError::from(StoreError::RowNotFound(4)),
            ItemsServiceError::NotFound(ItemId::from_u64(4))
        );
    }
}
