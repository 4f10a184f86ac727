//! Strongly-typed identifiers for simulation entities.
//!
//! A `BodyId` names a slot in the body set. Spring links and contact
//! manifolds refer to bodies by id, never by reference, so detaching
//! a body cannot leave dangling borrows.

use serde::{Deserialize, Serialize};

/// Index into the body set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for BodyId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
