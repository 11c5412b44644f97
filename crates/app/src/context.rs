//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::{
    database::Db,
    domain::{
        carts::{CartsService, MemoryCartsService},
        items::{ItemsService, MemoryItemsService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub items: Arc<dyn ItemsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context over a fresh, empty store.
    ///
    /// Both services share the one store so carts always aggregate against the
    /// live catalog.
    #[must_use]
    pub fn in_memory() -> Self {
        let db = Db::new();

        Self {
            items: Arc::new(MemoryItemsService::new(db.clone())),
            carts: Arc::new(MemoryCartsService::new(db)),
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
