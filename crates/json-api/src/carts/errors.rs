//! Cart Errors

use salvo::http::StatusError;

use shop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::CartNotFound(_) => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ItemNotFound(_) => StatusError::not_found().brief("Item not found"),
    }
}
