//! Create Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use shop_app::domain::items::data::NewItem;

use crate::{
    extensions::*,
    items::models::{ItemResponse, ensure_price},
    state::State,
};

/// Create Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct CreateItemRequest {
    /// Display name
    pub name: String,

    /// Unit price, non-negative
    pub price: f64,
}

/// Create Item Handler
#[endpoint(
    tags("items"),
    summary = "Create Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Negative price"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let item = state
        .app
        .items
        .create_item(NewItem {
            price: ensure_price(request.price)?,
            name: request.name,
        })
        .await;

    info!(item_id = %item.id, "item created");

    res.add_header(LOCATION, format!("/item/{}", item.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
