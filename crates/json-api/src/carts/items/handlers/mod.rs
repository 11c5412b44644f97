//! Cart Item Handlers

pub(crate) mod add;
