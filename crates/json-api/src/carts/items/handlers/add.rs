//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use shop_app::domain::{carts::records::CartId, items::records::ItemId};

use crate::{
    carts::errors::into_status_error, extensions::*, messages::MessageResponse, state::State,
};

/// Add Cart Item Handler
///
/// Adds one unit of an item to a cart.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added to cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
    ),
)]
#[tracing::instrument(
    name = "carts.add_item",
    skip(cart_id, item_id, depot),
    fields(cart_id = tracing::field::Empty, item_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart_id: PathParam<u64>,
    item_id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = CartId::from_u64(cart_id.into_inner());
    let item = ItemId::from_u64(item_id.into_inner());

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("item_id", tracing::field::display(item));

    let line = state
        .app
        .carts
        .add_item(cart, item)
        .await
        .map_err(into_status_error)?;

    info!(quantity = line.quantity, "item added to cart");

    Ok(Json(MessageResponse::new("Item added to cart")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_line};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/{cart_id}/add/{item_id}").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_item_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .withf(|cart, item| *cart == CartId::from_u64(3) && *item == ItemId::from_u64(8))
            .return_once(|_, _| Ok(make_line(8, "Pen", 1)));

        let mut res = TestClient::post("http://example.com/cart/3/add/8")
            .send(&make_service(carts))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Item added to cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_missing_cart_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|cart, _| Err(CartsServiceError::CartNotFound(cart)));

        let res = TestClient::post("http://example.com/cart/3/add/8")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_add_missing_item_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_item()
            .once()
            .return_once(|_, item| Err(CartsServiceError::ItemNotFound(item)));

        let res = TestClient::post("http://example.com/cart/3/add/99")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
