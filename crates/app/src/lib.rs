//! Shared application domain and in-memory storage modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
