//! Item Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use shop_app::domain::{items::data::ItemFilter, listing::Bounds};

use crate::{extensions::*, items::models::ItemResponse, state::State};

/// Item Index Handler
///
/// Returns a page of items in creation order.
#[endpoint(
    tags("items"),
    summary = "List Items",
    responses(
        (status_code = StatusCode::OK, description = "Items listed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unparsable filter"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid filter"),
    ),
)]
pub(crate) async fn handler(
    offset: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    min_price: QueryParam<String, false>,
    max_price: QueryParam<String, false>,
    show_deleted: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ItemFilter {
        page: limit.into_page(offset)?,
        price: Bounds::new(
            min_price.into_price_bound("min_price")?,
            max_price.into_price_bound("max_price")?,
        ),
        show_deleted: show_deleted.parse_as("show_deleted")?.unwrap_or_default(),
    };

    let items = state.app.items.list_items(filter).await;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop_app::domain::{items::MockItemsService, listing::Page};

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("item").get(handler))
    }

    #[tokio::test]
    async fn test_index_uses_default_filter() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_list_items()
            .once()
            .withf(|filter| *filter == ItemFilter::default())
            .return_once(|_| vec![make_item(1, "Cup", 2.0), make_item(2, "Plate", 3.0)]);

        let mut res = TestClient::get("http://example.com/item")
            .send(&make_service(items))
            .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|item| item.id).collect::<Vec<_>>(),
            [1, 2]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_query_filters() -> TestResult {
        let mut items = MockItemsService::new();

        items
            .expect_list_items()
            .once()
            .withf(|filter| {
                *filter
                    == ItemFilter {
                        page: Page::new(2, 5),
                        price: Bounds::new(Some(1.5), Some(10.0)),
                        show_deleted: true,
                    }
            })
            .return_once(|_| Vec::new());

        let mut res = TestClient::get(
            "http://example.com/item?offset=2&limit=5&min_price=1.5&max_price=10&show_deleted=true",
        )
        .send(&make_service(items))
        .await;

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_zero_limit_returns_422() {
        let mut items = MockItemsService::new();

        items.expect_list_items().never();

        let res = TestClient::get("http://example.com/item?limit=0")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_index_negative_price_bound_returns_422() {
        let mut items = MockItemsService::new();

        items.expect_list_items().never();

        let res = TestClient::get("http://example.com/item?min_price=-3")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_index_unparsable_filters_return_400() {
        for query in ["offset=-1", "limit=abc", "max_price=cheap", "show_deleted=yes"] {
            let mut items = MockItemsService::new();

            items.expect_list_items().never();

            let res = TestClient::get(format!("http://example.com/item?{query}"))
                .send(&make_service(items))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::BAD_REQUEST),
                "expected {query} to be rejected"
            );
        }
    }
}
