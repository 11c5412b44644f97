//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shop_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartId, CartLineRecord, CartRecord},
        },
        items::{
            MockItemsService,
            records::{ItemId, ItemRecord},
        },
    },
};

use crate::state::State;

pub(crate) fn make_item(id: u64, name: &str, price: f64) -> ItemRecord {
    ItemRecord {
        id: ItemId::from_u64(id),
        name: name.to_string(),
        price,
        deleted: false,
    }
}

pub(crate) fn make_cart(id: u64) -> CartRecord {
    CartRecord::empty(CartId::from_u64(id))
}

pub(crate) fn make_line(item: u64, name: &str, quantity: u64) -> CartLineRecord {
    CartLineRecord {
        item: ItemId::from_u64(item),
        name: name.to_string(),
        quantity,
        available: true,
    }
}

fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_create_item().never();
    items.expect_get_item().never();
    items.expect_list_items().never();
    items.expect_replace_item().never();
    items.expect_update_item().never();
    items.expect_delete_item().never();

    items
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_list_carts().never();
    carts.expect_add_item().never();

    carts
}

fn state(items: MockItemsService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        items: Arc::new(items),
        carts: Arc::new(carts),
    })
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(items, strict_carts_mock())))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_items_mock(), carts)))
            .push(route),
    )
}
