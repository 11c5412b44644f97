//! Item Records

use crate::ids::TypedId;

/// Item Id
pub type ItemId = TypedId<ItemRecord>;

/// Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

impl ItemRecord {
    /// Whether the item is visible to default reads and open to modification.
    ///
    /// Soft-deleted items stay resolvable by id, so existing cart lines can still
    /// see them, but they are hidden from `get`/default listings and reject updates.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The item was active and is now soft-deleted.
    Deleted,

    /// The item was already deleted, or never existed.
    AlreadyDeleted,
}
