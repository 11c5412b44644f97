//! App Router

use std::sync::Arc;

use salvo::{Router, affix_state::inject, prelude::CatchPanic, trailing_slash::remove_slash};

use crate::{carts, healthcheck, items, observability, state::State};

/// Resource routes without middleware.
pub(crate) fn api_router() -> Router {
    Router::new()
        .get(healthcheck::root)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("item")
                .get(items::index::handler)
                .post(items::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(items::get::handler)
                        .put(items::replace::handler)
                        .patch(items::update::handler)
                        .delete(items::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(Router::with_path("{id}").get(carts::get::handler))
                .push(
                    Router::with_path("{cart_id}/add/{item_id}").post(carts::items::add::handler),
                ),
        )
}

/// Full application router with state and request middleware.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(api_router())
}
