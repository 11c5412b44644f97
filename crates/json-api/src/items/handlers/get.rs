//! Get Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shop_app::domain::items::records::ItemId;

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// Get Item Handler
///
/// Returns an active item. Deleted items are reported as not found.
#[endpoint(
    tags("items"),
    summary = "Get Item",
    responses(
        (status_code = StatusCode::OK, description = "Item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .get_item(ItemId::from_u64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
