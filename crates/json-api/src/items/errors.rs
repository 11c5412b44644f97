//! Item Errors

use salvo::http::StatusError;
use tracing::warn;

use shop_app::domain::items::ItemsServiceError;

pub(crate) fn into_status_error(error: ItemsServiceError) -> StatusError {
    match error {
        ItemsServiceError::NotFound(_) => StatusError::not_found().brief("Item not found"),
        ItemsServiceError::Unmodifiable(item) => {
            warn!(item_id = %item, "rejected modification of deleted item");

            StatusError::conflict().brief("Item is deleted and cannot be modified")
        }
        ItemsServiceError::ProtectedField => {
            StatusError::unprocessable_entity().brief("Field `deleted` cannot be modified")
        }
    }
}
