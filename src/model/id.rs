//! Process-unique identifiers for objects and points.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_raw() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Stable identity of a [`CanvasObject`](super::CanvasObject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        Self(next_raw())
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

/// Stable identity of a [`CanvasPoint`](super::CanvasPoint).
///
/// Unlike an index, it survives insertions and removals elsewhere in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PointId(u64);

impl PointId {
    pub fn next() -> Self {
        Self(next_raw())
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pt#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_across_kinds() {
        let a = ObjectId::next();
        let b = PointId::next();
        let c = ObjectId::next();
        assert_ne!(a, c);
        assert_ne!(a.raw(), b.raw());
        assert!(c.raw() > a.raw());
    }
}
