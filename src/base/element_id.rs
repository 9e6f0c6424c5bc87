//! Arena identity for syntax elements.

use std::fmt;

/// Index of an element inside a [`Model`](crate::syntax::Model) arena.
///
/// Two elements are the same element iff their ids are equal. Ids are only
/// meaningful for the model that allocated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Position of the element in its arena.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
