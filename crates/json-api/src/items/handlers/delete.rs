//! Delete Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use shop_app::domain::items::records::{DeleteOutcome, ItemId};

use crate::{extensions::*, messages::MessageResponse, state::State};

/// Delete Item Handler
///
/// Soft-deletes an item. Deleting a missing or already deleted item still succeeds.
#[endpoint(
    tags("items"),
    summary = "Delete Item",
    responses(
        (status_code = StatusCode::OK, description = "Item deleted or already deleted"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ItemId::from_u64(id.into_inner());

    let message = match state.app.items.delete_item(id).await {
        DeleteOutcome::Deleted => {
            info!(item_id = %id, "item deleted");

            "Item deleted"
        }
        DeleteOutcome::AlreadyDeleted => "Item already deleted",
    };

    Ok(Json(MessageResponse::new(message)))
}
