//! Replace Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use shop_app::domain::items::{data::ItemReplacement, records::ItemId};

use crate::{
    extensions::*,
    items::{
        errors::into_status_error,
        models::{ItemResponse, ensure_price},
    },
    state::State,
};

/// Replace Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReplaceItemRequest {
    /// New display name
    pub name: String,

    /// New unit price, non-negative
    pub price: f64,
}

/// Replace Item Handler
#[endpoint(
    tags("items"),
    summary = "Replace Item",
    responses(
        (status_code = StatusCode::OK, description = "Item replaced"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::CONFLICT, description = "Item is deleted"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Negative price"),
    ),
)]
#[tracing::instrument(
    name = "items.replace",
    skip(id, json, depot),
    fields(item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<ReplaceItemRequest>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let id = ItemId::from_u64(id.into_inner());

    tracing::Span::current().record("item_id", tracing::field::display(id));

    let item = state
        .app
        .items
        .replace_item(
            id,
            ItemReplacement {
                price: ensure_price(request.price)?,
                name: request.name,
            },
        )
        .await
        .map_err(into_status_error)?;

    info!("item replaced");

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
        items_service(items, Router::with_path("item/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_replace_returns_updated_item() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_replace_item()
            .once()
            .withf(|id, replacement| {
                *id == ItemId::from_u64(3)
                    && *replacement
                        == ItemReplacement {
                            name: "Desk".to_string(),
                            price: 120.0,
                        }
            })
            .return_once(|_, _| Ok(make_item(3, "Desk", 120.0)));

        let mut res = TestClient::put("http://example.com/item/3")
            .json(&json!({ "name": "Desk", "price": 120.0 }))
            .send(&make_service(items))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Desk");

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_deleted_item_returns_409() {
        let mut items = MockItemsService::new();

        items
            .expect_replace_item()
            .once()
            .return_once(|id, _| Err(ItemsServiceError::Unmodifiable(id)));

        let res = TestClient::put("http://example.com/item/3")
            .json(&json!({ "name": "Desk", "price": 1.0 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_replace_missing_item_returns_404() {
        let mut items = MockItemsService::new();

        items
            .expect_replace_item()
            .once()
            .return_once(|id, _| Err(ItemsServiceError::NotFound(id)));

        let res = TestClient::put("http://example.com/item/8")
            .json(&json!({ "name": "Desk", "price": 1.0 }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_replace_requires_every_field() {
        let mut items = MockItemsService::new();

        items.expect_replace_item().never();

        let res = TestClient::put("http://example.com/item/3")
            .json(&json!({ "name": "Desk" }))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
