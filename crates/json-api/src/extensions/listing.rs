//! Listing query parsing helpers.

use std::{fmt::Display, str::FromStr};

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use shop_app::domain::listing::Page;

use crate::extensions::*;

/// Listing filters arrive as raw strings so that a value which does not parse is
/// rejected instead of being read as absent.
pub(crate) trait ListingParamExt: Sized {
    /// Parse an optional query value as `T`. Unparsable values are a bad request.
    fn parse_as<T>(self, name: &str) -> Result<Option<T>, StatusError>
    where
        T: FromStr,
        T::Err: Display;

    /// Resolve `limit` (self) and `offset` into a page. `limit` must be positive.
    fn into_page(self, offset: Self) -> Result<Page, StatusError>;

    /// Validate an optional price bound. Supplied bounds must be finite and non-negative.
    fn into_price_bound(self, name: &str) -> Result<Option<f64>, StatusError>;
}

impl ListingParamExt for QueryParam<String, false> {
    fn parse_as<T>(self, name: &str) -> Result<Option<T>, StatusError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.into_inner()
            .map(|value| value.trim().parse::<T>())
            .transpose()
            .or_400(&format!("could not parse \"{name}\" query parameter"))
    }

    fn into_page(self, offset: Self) -> Result<Page, StatusError> {
        let limit = self
            .parse_as::<usize>("limit")?
            .unwrap_or(Page::DEFAULT_LIMIT);

        if limit == 0 {
            return Err(StatusError::unprocessable_entity().brief("limit must be greater than 0"));
        }

        let offset = offset.parse_as::<usize>("offset")?.unwrap_or_default();

        Ok(Page::new(offset, limit))
    }

    fn into_price_bound(self, name: &str) -> Result<Option<f64>, StatusError> {
        match self.parse_as::<f64>(name)? {
            Some(price) if !price.is_finite() || price < 0.0 => Err(
                StatusError::unprocessable_entity().brief(format!("{name} must be non-negative")),
            ),
            bound => Ok(bound),
        }
    }
}
