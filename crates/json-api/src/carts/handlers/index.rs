//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use shop_app::domain::{carts::data::CartFilter, listing::Bounds};

use crate::{carts::models::CartResponse, extensions::*, state::State};

/// Cart Index Handler
///
/// Returns a page of carts, filtered on freshly recomputed totals.
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    responses(
        (status_code = StatusCode::OK, description = "Carts listed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unparsable filter"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid filter"),
    ),
)]
pub(crate) async fn handler(
    offset: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    min_price: QueryParam<String, false>,
    max_price: QueryParam<String, false>,
    min_quantity: QueryParam<String, false>,
    max_quantity: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = CartFilter {
        page: limit.into_page(offset)?,
        price: Bounds::new(
            min_price.into_price_bound("min_price")?,
            max_price.into_price_bound("max_price")?,
        ),
        quantity: Bounds::new(
            min_quantity.parse_as("min_quantity")?,
            max_quantity.parse_as("max_quantity")?,
        ),
    };

    let carts = state.app.carts.list_carts(filter).await;

    Ok(Json(carts.into_iter().map(Into::into).collect()))
}
