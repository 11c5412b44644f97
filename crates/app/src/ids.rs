//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Integer identifier tagged with the record type it refers to.
pub struct TypedId<T>(u64, PhantomData<fn() -> T>);

impl<T> TypedId<T> {
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn into_u64(self) -> u64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<T> From<TypedId<T>> for u64 {
    fn from(value: TypedId<T>) -> Self {
        value.into_u64()
    }
}

/// Monotonic id allocator for a single record type.
///
/// Starts at zero and increments before issuing, so the first id is `1`. Ids are
/// never handed out twice, even after the record they named is soft-deleted.
pub struct Sequence<T> {
    last: u64,
    marker: PhantomData<fn() -> T>,
}

impl<T> Sequence<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: 0,
            marker: PhantomData,
        }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> TypedId<T> {
        self.last += 1;

        TypedId::from_u64(self.last)
    }

    /// The most recently issued id, if any.
    #[cfg(test)]
    pub(crate) fn last_issued(&self) -> Option<TypedId<T>> {
        (self.last > 0).then(|| TypedId::from_u64(self.last))
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Sequence").field("last", &self.last).finish()
    }
}
