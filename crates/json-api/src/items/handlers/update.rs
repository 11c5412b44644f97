//! Update Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use shop_app::domain::items::{data::ItemPatch, records::ItemId};

use crate::{
    extensions::*,
    items::{
        errors::into_status_error,
        models::{ItemResponse, ensure_price},
    },
    state::State,
};

/// Update Item Request
///
/// Every field is optional. `deleted` is accepted only so it can be rejected.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateItemRequest {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,

    /// New unit price, non-negative
    #[serde(default)]
    pub price: Option<f64>,

    /// Not modifiable; use `DELETE /item/{id}` instead
    #[serde(default, deserialize_with = "supplied")]
    pub deleted: Option<Option<bool>>,
}

/// Marks a field as supplied even when its value is `null`.
fn supplied<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TryFrom<UpdateItemRequest> for ItemPatch {
    type Error = StatusError;

    fn try_from(request: UpdateItemRequest) -> Result<Self, Self::Error> {
        Ok(ItemPatch {
            name: request.name,
            price: request.price.map(ensure_price).transpose()?,
            deleted: request.deleted,
        })
    }
}

/// Update Item Handler
#[endpoint(
    tags("items"),
    summary = "Update Item",
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::CONFLICT, description = "Item is deleted"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Protected field or negative price"),
    ),
)]
#[tracing::instrument(
    name = "items.update",
    skip(id, json, depot),
    fields(item_id = tracing::field::Empty, empty_patch = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<UpdateItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let patch = ItemPatch::try_from(json.into_inner())?;
    let id = ItemId::from_u64(id.into_inner());

    let span = tracing::Span::current();

    span.record("item_id", tracing::field::display(id));
    span.record("empty_patch", patch.is_empty());

    let item = state
        .app
        .items
        .update_item(id, patch)
        .await
        .map_err(into_status_error)?;

    info!("item updated");

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shop_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("item/{id}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_forwards_supplied_fields_only() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .withf(|id, patch| {
                *id == ItemId::from_u64(5)
                    && *patch
                        == ItemPatch {
                            name: None,
                            price: Some(4.0),
                            deleted: None,
                        }
            })
            .return_once(|_, _| Ok(make_item(5, "Spoon", 4.0)));

        let mut res = TestClient::patch("http://example.com/item/5")
            .json(&json!({ "price": 4.0 }))
            .send(&make_service(items))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Spoon");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_empty_body_is_a_noop_patch() {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .withf(|_, patch| patch.is_empty())
            .return_once(|_, _| Ok(make_item(5, "Spoon", 4.0)));

        let res = TestClient::patch("http://example.com/item/5")
            .json(&json!({}))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_update_deleted_field_returns_422() {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .withf(|_, patch| patch.deleted == Some(Some(false)))
            .return_once(|_, _| Err(ItemsServiceError::ProtectedField));

        let res = TestClient::patch("http://example.com/item/5")
            .json(&json!({ "deleted": false }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_update_null_deleted_field_is_still_forwarded() {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .withf(|_, patch| patch.deleted == Some(None) && !patch.is_empty())
            .return_once(|_, _| Err(ItemsServiceError::ProtectedField));

        let res = TestClient::patch("http://example.com/item/5")
            .json(&json!({ "deleted": null }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_update_deleted_item_returns_409() {
        let mut items = MockItemsService::new();

        items
            .expect_update_item()
            .once()
            .return_once(|id, _| Err(ItemsServiceError::Unmodifiable(id)));

        let res = TestClient::patch("http://example.com/item/5")
            .json(&json!({ "name": "Fork" }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_update_negative_price_returns_422() {
        let mut items = MockItemsService::new();

        items.expect_update_item().never();

        let res = TestClient::patch("http://example.com/item/5")
            .json(&json!({ "price": -0.5 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
