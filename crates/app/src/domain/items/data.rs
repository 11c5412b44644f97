//! Items Data

use crate::domain::{
    items::records::ItemRecord,
    listing::{Bounds, Page},
};

/// New Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

/// Full Item Replacement Data
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReplacement {
    pub name: String,
    pub price: f64,
}

/// Partial Item Update Data
///
/// `deleted` is carried only so that an attempt to set it can be rejected. It is
/// `Some` whenever the caller named the field, including with an explicit null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub deleted: Option<Option<bool>>,
}

impl ItemPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.deleted.is_none()
    }
}

/// Item Listing Filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub page: Page,
    pub price: Bounds<f64>,
    pub show_deleted: bool,
}

impl ItemFilter {
    #[must_use]
    pub fn matches(&self, item: &ItemRecord) -> bool {
        (self.show_deleted || item.is_active()) && self.price.contains(&item.price)
    }
}
